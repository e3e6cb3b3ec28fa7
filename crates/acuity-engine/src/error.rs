use acuity_core::models::Signal;
use thiserror::Error;

/// Problems with form state that keep it from reaching the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("assessment incomplete, not yet assessed: {}", labels(.missing))]
    Incomplete { missing: Vec<Signal> },

    #[error("pain score {0} is outside 0..=10")]
    PainOutOfRange(u8),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("operator id is required to finalize a triage record")]
    MissingOperator,

    #[error("time arithmetic error: {0}")]
    Time(#[from] jiff::Error),
}

fn labels(signals: &[Signal]) -> String {
    signals
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}
