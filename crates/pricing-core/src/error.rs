//! Error types for pricing-core

/// Result type for pricing-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving and pricing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A cluster declared a (cpu, gb) pair that is not in the catalog
    #[error("Invalid combination of CPU and memory: {cpu} vCPU, {gb} GB")]
    UnknownCombination { cpu: f64, gb: f64 },

    /// A currency literal could not be parsed as a decimal
    #[error("Invalid currency format: {text}")]
    CurrencyFormat { text: String },

    /// A metered schedule declared an hour marker outside 0..=24
    #[error("Hour marker {value} is outside the 0-24 range")]
    HourMarkerOutOfRange { value: u32 },

    /// The input document failed to deserialize
    #[error("Failed to parse pricing config: {message}")]
    ConfigParse { message: String },
}
