use thiserror::Error;

/// Field-level constraint violations, raised before any record is written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: this field is required")]
    Required { field: &'static str },
    #[error("{field}: ensure this value has at most {max} characters (it has {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field}: enter a valid email address")]
    InvalidEmail { field: &'static str },
    #[error("{field}: ensure this value is greater than or equal to 0")]
    Negative { field: &'static str },
    #[error("{field}: ensure this value is less than or equal to {max}")]
    OutOfRange { field: &'static str, max: u64 },
    #[error("{field}: ensure that there are no more than {max} decimal places")]
    TooManyDecimalPlaces { field: &'static str, max: u32 },
    #[error("{field}: ensure that there are no more than {max} digits before the decimal point")]
    TooManyWholeDigits { field: &'static str, max: usize },
    #[error("{field}: invalid image reference: {reason}")]
    InvalidImage {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidEmail { field }
            | ValidationError::Negative { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooManyDecimalPlaces { field, .. }
            | ValidationError::TooManyWholeDigits { field, .. }
            | ValidationError::InvalidImage { field, .. } => field,
        }
    }
}
