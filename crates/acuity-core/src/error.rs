use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("pain score {0} is outside 0..=10")]
    PainOutOfRange(u8),

    #[error("acuity level {0} is outside 1..=5")]
    InvalidLevel(u8),
}
