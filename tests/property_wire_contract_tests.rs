use dataplot_rs::api::{ConnectionGate, HANDSHAKE_SENTINEL};
use dataplot_rs::api::wire_contract::{data_message, encode_config};
use dataplot_rs::core::{AxisOptions, PlotConfig, PlotKind, SeriesConfig};
use dataplot_rs::transport::{DualTransport, MemoryChannel, TransportMode};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = PlotKind> {
    prop_oneof![
        Just(PlotKind::Line),
        Just(PlotKind::Scatter),
        Just(PlotKind::Bar),
        Just(PlotKind::Pie),
        Just(PlotKind::Histogram),
    ]
}

proptest! {
    #[test]
    fn encoding_is_deterministic_and_single_line(
        kind in arb_kind(),
        title in ".{0,24}",
        column in "[a-z]{1,12}",
        color in proptest::option::of(0u32..=0xFF_FFFF),
        min in proptest::option::of(-1_000.0f64..1_000.0),
        max in proptest::option::of(-1_000.0f64..1_000.0),
    ) {
        let mut axis = AxisOptions::new();
        if let Some(min) = min {
            axis = axis.with_min(min);
        }
        if let Some(max) = max {
            axis = axis.with_max(max);
        }

        let mut series = SeriesConfig::new(column);
        if let Some(color) = color {
            series = series.with_color(color);
        }

        let plot = PlotConfig::new(kind, title)
            .with_x_axis(axis.clone())
            .with_y_axis(axis)
            .with_series(series);

        let first = encode_config(&plot).expect("encode");
        let second = encode_config(&plot).expect("encode");
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.contains('\n'));
        prop_assert!(
            first.starts_with(r#"{"type":"config""#),
            "encoded config must start with the config type prefix"
        );
    }

    #[test]
    fn numeric_rows_survive_and_text_rows_are_dropped(
        numeric in proptest::collection::vec(-1.0e12f64..1.0e12, 0..8),
        text in proptest::collection::vec("[a-z ]{1,8}", 0..8),
        timestamp in 0u64..u64::MAX / 2,
    ) {
        let rendered_numeric: Vec<String> = numeric.iter().map(|v| v.to_string()).collect();
        let mut row: Vec<(String, String)> = Vec::new();
        for (i, value) in rendered_numeric.iter().enumerate() {
            row.push((format!("n{i}"), value.clone()));
        }
        for (i, value) in text.iter().enumerate() {
            row.push((format!("t{i}"), value.clone()));
        }

        let message = data_message(
            timestamp,
            row.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        prop_assert_eq!(message.timestamp, timestamp);
        prop_assert_eq!(message.values.len(), numeric.len());
        for (i, value) in numeric.iter().enumerate() {
            let kept = message.values.get(&format!("n{i}")).expect("numeric kept");
            prop_assert!((kept - value).abs() <= value.abs() * 1e-12);
        }
        for i in 0..text.len() {
            prop_assert!(
                !message.values.contains_key(&format!("t{i}")),
                "text column t{} must be dropped",
                i
            );
        }
    }

    #[test]
    fn buffered_lines_flush_in_original_order_without_loss(
        lines in proptest::collection::vec("[ -~]{0,32}", 0..32),
        tail in proptest::collection::vec("[ -~]{0,32}", 0..8),
    ) {
        prop_assume!(lines.iter().all(|l| l != HANDSHAKE_SENTINEL));

        let transport = DualTransport::new(
            MemoryChannel::new(),
            MemoryChannel::new(),
            TransportMode::Primary,
        );
        let mut gate = ConnectionGate::new(transport);

        for line in &lines {
            gate.send(line);
        }
        gate.transport_mut().primary_mut().push_inbound(HANDSHAKE_SENTINEL);
        gate.poll();
        for line in &tail {
            gate.send(line);
        }

        let mut expected = lines.clone();
        expected.extend(tail.iter().cloned());
        prop_assert_eq!(gate.transport().primary().written(), expected.as_slice());
    }
}
