use crate::domain::model::{LEVEL_MAX, LEVEL_MIN};
use crate::utils::error::{TierError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects levels the tier table does not cover.
pub fn validate_level(level: i64) -> Result<i32> {
    if level < LEVEL_MIN as i64 || level > LEVEL_MAX as i64 {
        return Err(TierError::InvalidLevel { level });
    }
    Ok(level as i32)
}

pub fn validate_rating(field_name: &str, rating: f64) -> Result<()> {
    if !rating.is_finite() {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rating.to_string(),
            reason: "Rating must be a finite number".to_string(),
        });
    }
    validate_range(field_name, rating, 0.0, 5.0)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TierError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
