//! Field-level request validation helpers.
//!
//! Each helper reports the offending field by name in a 400 response.

use rust_decimal::Decimal;
use salvo::prelude::StatusError;

const MONEY_SCALE: u32 = 2;

pub(crate) fn non_empty_max(field: &str, value: &str, max: usize) -> Result<(), StatusError> {
    if value.is_empty() {
        return Err(StatusError::bad_request().brief(format!("{field}: must not be empty")));
    }

    max_len(field, value, max)
}

pub(crate) fn max_len(field: &str, value: &str, max: usize) -> Result<(), StatusError> {
    if value.chars().count() > max {
        return Err(
            StatusError::bad_request().brief(format!("{field}: must be at most {max} characters"))
        );
    }

    Ok(())
}

pub(crate) fn positive_money(field: &str, value: Decimal) -> Result<(), StatusError> {
    if value <= Decimal::ZERO {
        return Err(StatusError::bad_request().brief(format!("{field}: must be greater than 0")));
    }

    money_scale(field, value)
}

pub(crate) fn non_negative_money(field: &str, value: Decimal) -> Result<(), StatusError> {
    if value < Decimal::ZERO {
        return Err(StatusError::bad_request().brief(format!("{field}: must not be negative")));
    }

    money_scale(field, value)
}

fn money_scale(field: &str, value: Decimal) -> Result<(), StatusError> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(StatusError::bad_request()
            .brief(format!("{field}: must have at most {MONEY_SCALE} decimal places")));
    }

    Ok(())
}

pub(crate) fn non_negative_int(field: &str, value: i32) -> Result<(), StatusError> {
    if value < 0 {
        return Err(StatusError::bad_request().brief(format!("{field}: must not be negative")));
    }

    Ok(())
}

pub(crate) fn rating_range(field: &str, value: i32) -> Result<(), StatusError> {
    if !(1..=5).contains(&value) {
        return Err(StatusError::bad_request().brief(format!("{field}: must be between 1 and 5")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_overlong_strings() {
        assert!(non_empty_max("name", "", 10).is_err());
        assert!(non_empty_max("name", "1234567890a", 10).is_err());
        assert!(non_empty_max("name", "ok", 10).is_ok());
    }

    #[test]
    fn money_bounds_and_scale() {
        assert!(positive_money("price", Decimal::ZERO).is_err());
        assert!(positive_money("price", Decimal::new(-100, 2)).is_err());
        assert!(positive_money("price", Decimal::new(19999, 3)).is_err());
        assert!(positive_money("price", Decimal::new(1999, 2)).is_ok());

        assert!(non_negative_money("cost_price", Decimal::ZERO).is_ok());
        assert!(non_negative_money("cost_price", Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(rating_range("rating", 0).is_err());
        assert!(rating_range("rating", 6).is_err());
        assert!(rating_range("rating", 1).is_ok());
        assert!(rating_range("rating", 5).is_ok());
    }
}
