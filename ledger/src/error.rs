use thiserror::Error;

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Minimum rollover time cannot exceed the maximum rollover time.")]
    MinimumRolloverAboveMaximum,

    #[error("Maximum rollover time cannot be set below the minimum rollover time.")]
    MaximumRolloverBelowMinimum,

    #[error("Mark-delete throttle rate cannot be negative.")]
    NegativeMarkDeleteRate,

    #[error("No offloader is configured for this ledger.")]
    OffloadNotConfigured,
}
