use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConsumptionError {
    #[error("usage time cannot be negative (minutes per day: {minutes}, days per month: {days})")]
    NegativeUsage { minutes: f64, days: i32 },

    #[error("efficiency must be in (0, 1], got {0}")]
    InvalidEfficiency(f64),

    #[error("appliance '{0}' is not a smart appliance and has no efficiency factor")]
    NotSmart(String),

    #[error("tariff must be a finite, non-negative rate per kWh, got {0}")]
    InvalidTariff(f64),

    #[error("invalid catalog entry '{name}': {reason}")]
    InvalidCatalogEntry { name: String, reason: String },
}

pub type ConsumptionResult<T> = std::result::Result<T, ConsumptionError>;
