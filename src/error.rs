use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot '{title}' has no series and cannot be emitted")]
    IncompletePlot { title: String },

    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
