use dataplot_rs::api::{ConnectionGate, ConnectionPhase, HANDSHAKE_SENTINEL};
use dataplot_rs::transport::{DualTransport, MemoryChannel, TransportMode};

fn gate_on_primary() -> ConnectionGate<MemoryChannel, MemoryChannel> {
    let transport = DualTransport::new(
        MemoryChannel::new(),
        MemoryChannel::new(),
        TransportMode::Primary,
    );
    ConnectionGate::new(transport)
}

#[test]
fn sends_are_buffered_until_handshake_then_flushed_in_order() {
    let mut gate = gate_on_primary();

    gate.send("one");
    gate.send("two");
    gate.send("three");
    assert_eq!(gate.phase(), ConnectionPhase::Disconnected);
    assert_eq!(gate.buffered_len(), 3);
    assert!(gate.transport().primary().written().is_empty());

    gate.transport_mut()
        .primary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(gate.poll());

    assert!(gate.is_connected());
    assert_eq!(gate.buffered_len(), 0);
    assert_eq!(gate.transport().primary().written(), ["one", "two", "three"]);
}

#[test]
fn post_handshake_sends_go_straight_through_after_the_flush() {
    let mut gate = gate_on_primary();
    gate.send("buffered");
    gate.transport_mut()
        .primary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    gate.poll();

    gate.send("direct");
    assert_eq!(gate.transport().primary().written(), ["buffered", "direct"]);
}

#[test]
fn flush_happens_at_most_once_with_no_duplication() {
    let mut gate = gate_on_primary();
    gate.send("only");
    gate.transport_mut()
        .primary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(gate.poll());

    gate.transport_mut()
        .primary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(!gate.poll());
    assert_eq!(gate.transport().primary().written(), ["only"]);
}

#[test]
fn non_sentinel_lines_do_not_transition() {
    let mut gate = gate_on_primary();
    gate.transport_mut().primary_mut().push_inbound("data plot");
    gate.transport_mut().primary_mut().push_inbound("DATAPLOT");
    gate.transport_mut().primary_mut().push_inbound("");

    assert!(!gate.poll());
    assert_eq!(gate.phase(), ConnectionPhase::Disconnected);
}

#[test]
fn sentinel_on_inactive_channel_is_not_observed() {
    let mut gate = gate_on_primary();
    gate.send("held");

    gate.transport_mut()
        .secondary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(!gate.poll());
    assert_eq!(gate.phase(), ConnectionPhase::Disconnected);
    assert_eq!(gate.buffered_len(), 1);
}

#[test]
fn switching_to_the_channel_holding_the_sentinel_connects_and_flushes_there() {
    let mut gate = gate_on_primary();
    gate.send("held");
    gate.transport_mut()
        .secondary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(!gate.poll());

    gate.set_mode(TransportMode::Secondary);
    assert!(gate.poll());
    assert!(gate.is_connected());
    assert!(gate.transport().primary().written().is_empty());
    assert_eq!(gate.transport().secondary().written(), ["held"]);
}

#[test]
fn custom_sentinel_replaces_the_default() {
    let transport = DualTransport::new(
        MemoryChannel::new(),
        MemoryChannel::new(),
        TransportMode::Primary,
    );
    let mut gate = ConnectionGate::with_sentinel(transport, "ready");

    gate.transport_mut()
        .primary_mut()
        .push_inbound(HANDSHAKE_SENTINEL);
    assert!(!gate.poll());

    gate.transport_mut().primary_mut().push_inbound("ready");
    assert!(gate.poll());
    assert!(gate.is_connected());
}

#[test]
fn sentinel_found_mid_stream_flushes_before_remaining_lines_are_ignored() {
    let mut gate = gate_on_primary();
    gate.send("queued");
    let primary = gate.transport_mut().primary_mut();
    primary.push_inbound("noise");
    primary.push_inbound(HANDSHAKE_SENTINEL);
    primary.push_inbound(HANDSHAKE_SENTINEL);

    assert!(gate.poll());
    assert!(gate.is_connected());
    assert_eq!(gate.transport().primary().written(), ["queued"]);
}
