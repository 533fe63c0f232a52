//! Error types for resource values and observation attributes.

use thiserror::Error;

/// Errors that can occur while storing a resource value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// The payload carried no bytes.
    #[error("Resource value is empty")]
    EmptyValue,

    /// The payload exceeds the length a single value can carry.
    #[error("Resource value too long: {len} bytes (max {max})")]
    ValueTooLong { len: usize, max: usize },
}

/// Errors that can occur while parsing an observation attribute query.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttributeError {
    /// The resource is not observable, so it has no report attributes.
    #[error("Resource is not observable")]
    NotObservable,

    /// The query named an attribute this resource doesn't understand.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The attribute value could not be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    /// Minimum period is greater than maximum period.
    #[error("pmin ({pmin}) greater than pmax ({pmax})")]
    PeriodRange { pmin: u32, pmax: u32 },
}
