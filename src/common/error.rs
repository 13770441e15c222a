#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <commands.csv> [state.json]")]
    MissingArg,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("state document error: {0}")]
    State(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid slot index {index}, expected 0..100")]
    InvalidIndex { index: usize },
}
