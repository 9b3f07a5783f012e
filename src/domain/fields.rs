//! Validated field value types.
//!
//! Every constrained column of the schema is represented by a type that can
//! only be built through a checking constructor, so a stored record never
//! holds an out-of-range value.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ValidationError;

/// Decimal places kept by every money column.
pub const MONEY_DECIMAL_PLACES: u32 = 2;
/// Total digits allowed by every money column.
pub const MONEY_MAX_DIGITS: usize = 10;
/// Upper bound of the persisted (signed 32-bit) quantity columns.
pub const MAX_QUANTITY: u32 = i32::MAX as u32;

const EMAIL_MAX_LEN: usize = 254;
const IMAGE_MAX_LEN: usize = 100;
const IMAGE_UPLOAD_DIR: &str = "products/";

/// Trims `value` and rejects it when empty or longer than `max` characters.
pub fn required_text(
    field: &'static str,
    value: impl AsRef<str>,
    max: Option<usize>,
) -> Result<String, ValidationError> {
    let value = value.as_ref().trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    check_len(field, value, max)?;
    Ok(value.to_string())
}

/// Like [`required_text`] but blank input is allowed and becomes `None`.
pub fn optional_text<S: AsRef<str>>(
    field: &'static str,
    value: Option<S>,
    max: Option<usize>,
) -> Result<Option<String>, ValidationError> {
    match value.as_ref().map(|v| AsRef::<str>::as_ref(v).trim()) {
        None | Some("") => Ok(None),
        Some(value) => {
            check_len(field, value, max)?;
            Ok(Some(value.to_string()))
        }
    }
}

fn check_len(field: &'static str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    match max {
        Some(max) if actual > max => Err(ValidationError::TooLong { field, max, actual }),
        _ => Ok(()),
    }
}

/// Rejects quantities that do not fit the persisted column.
pub fn quantity(field: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field,
            max: u64::from(MAX_QUANTITY),
        });
    }
    Ok(value)
}

/// An email-shaped address: `local@domain` with a dotted domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(field: &'static str, value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::Required { field });
        }
        check_len(field, value, Some(EMAIL_MAX_LEN))?;

        let invalid = ValidationError::InvalidEmail { field };
        let (local, domain) = value.rsplit_once('@').ok_or_else(|| invalid.clone())?;
        if !is_dot_atom(local) {
            return Err(invalid);
        }
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(invalid);
        }
        let label_ok = |label: &&str| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        };
        if !labels.iter().all(label_ok) {
            return Err(invalid);
        }
        // Top-level label: two or more characters, not all digits.
        let tld = labels[labels.len() - 1];
        if tld.chars().count() < 2 || tld.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

/// Unquoted local part: atext characters separated by single dots.
fn is_dot_atom(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";
    !local.is_empty()
        && local
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c)))
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative fixed-point amount with exactly two fractional digits and
/// at most ten digits in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MONEY_DECIMAL_PLACES));

    pub fn new(field: &'static str, value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::Negative { field });
        }
        let normalized = value.normalize();
        if normalized.scale() > MONEY_DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimalPlaces {
                field,
                max: MONEY_DECIMAL_PLACES,
            });
        }
        let max_whole = MONEY_MAX_DIGITS - MONEY_DECIMAL_PLACES as usize;
        let whole = normalized.trunc().abs().to_string();
        if whole.trim_start_matches('0').len() > max_whole {
            return Err(ValidationError::TooManyWholeDigits { field, max: max_whole });
        }

        let mut amount = normalized.abs();
        amount.rescale(MONEY_DECIMAL_PLACES);
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `self × quantity`, unconstrained by the column limits.
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Path of a stored image, relative to the media root and kept under
/// `products/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Accepts either a bare file name (placed under `products/`) or a path
    /// already rooted there.
    pub fn new(field: &'static str, value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::InvalidImage { field, reason: "empty path" });
        }
        if value.starts_with('/') || value.contains('\\') {
            return Err(ValidationError::InvalidImage { field, reason: "path must be relative" });
        }
        if value.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
            return Err(ValidationError::InvalidImage { field, reason: "malformed path segment" });
        }

        let path = if value.starts_with(IMAGE_UPLOAD_DIR) {
            value.to_string()
        } else if value.contains('/') {
            return Err(ValidationError::InvalidImage {
                field,
                reason: "images are stored under products/",
            });
        } else {
            format!("{IMAGE_UPLOAD_DIR}{value}")
        };
        check_len(field, &path, Some(IMAGE_MAX_LEN))?;
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
