//! Input validation run before any computation or network call
//!
//! Each rejection is attributed to the offending field so the
//! presentation layer can highlight it next to the input.

use thiserror::Error;

use crate::models::vehicle::{DrivingProfile, PriceSheet};

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate a full comparison request: distances, prices, horizon
pub fn validate_compare(
    profile: &DrivingProfile,
    prices: &PriceSheet,
    horizon_years: u32,
) -> Result<(), ValidationError> {
    validate_profile(profile)?;
    validate_prices(prices)?;
    validate_horizon(horizon_years)?;
    Ok(())
}

pub fn validate_profile(profile: &DrivingProfile) -> Result<(), ValidationError> {
    if profile.annual_km < 0.0 {
        return Err(ValidationError::new("profile.annual_km", "must not be negative"));
    }
    if profile.commute_km < 0.0 {
        return Err(ValidationError::new("profile.commute_km", "must not be negative"));
    }
    if profile.weekend_trip_km < 0.0 {
        return Err(ValidationError::new(
            "profile.weekend_trip_km",
            "must not be negative",
        ));
    }
    Ok(())
}

pub fn validate_prices(prices: &PriceSheet) -> Result<(), ValidationError> {
    let unit_prices = [
        ("prices.gasoline", prices.gasoline),
        ("prices.diesel", prices.diesel),
        ("prices.lpg", prices.lpg),
        ("prices.electricity", prices.electricity),
    ];
    for (field, value) in unit_prices {
        if value <= 0.0 {
            return Err(ValidationError::new(field, "must be positive"));
        }
    }

    let purchase_prices = [
        ("prices.purchase.gasoline", prices.purchase.gasoline),
        ("prices.purchase.diesel", prices.purchase.diesel),
        ("prices.purchase.lpg", prices.purchase.lpg),
        ("prices.purchase.hybrid", prices.purchase.hybrid),
        ("prices.purchase.plugin_hybrid", prices.purchase.plugin_hybrid),
    ];
    for (field, value) in purchase_prices {
        if value <= 0.0 {
            return Err(ValidationError::new(field, "must be positive"));
        }
    }

    Ok(())
}

pub fn validate_horizon(horizon_years: u32) -> Result<(), ValidationError> {
    if horizon_years < 1 {
        return Err(ValidationError::new("horizon_years", "must be at least 1"));
    }
    Ok(())
}

/// Both addresses must be non-blank before the estimator is consulted
pub fn validate_addresses(origin: &str, destination: &str) -> Result<(), ValidationError> {
    if origin.trim().is_empty() {
        return Err(ValidationError::new("origin", "must not be empty"));
    }
    if destination.trim().is_empty() {
        return Err(ValidationError::new("destination", "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{PurchasePrices, RouteMix};

    fn valid_profile() -> DrivingProfile {
        DrivingProfile {
            annual_km: 0.0,
            commute_km: 25.0,
            weekend_trip_km: 150.0,
            route_mix: RouteMix::Mixed,
        }
    }

    fn valid_prices() -> PriceSheet {
        PriceSheet {
            gasoline: 1.6,
            diesel: 1.7,
            lpg: 0.8,
            electricity: 0.2,
            purchase: PurchasePrices {
                gasoline: 25000.0,
                diesel: 28000.0,
                lpg: 26000.0,
                hybrid: 29000.0,
                plugin_hybrid: 34000.0,
            },
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_compare(&valid_profile(), &valid_prices(), 7).is_ok());
    }

    #[test]
    fn test_negative_commute_attributed_to_field() {
        let mut profile = valid_profile();
        profile.commute_km = -1.0;

        let err = validate_compare(&profile, &valid_prices(), 7).unwrap_err();
        assert_eq!(err.field, "profile.commute_km");
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut prices = valid_prices();
        prices.electricity = 0.0;

        let err = validate_compare(&valid_profile(), &prices, 7).unwrap_err();
        assert_eq!(err.field, "prices.electricity");
    }

    #[test]
    fn test_negative_purchase_price_rejected() {
        let mut prices = valid_prices();
        prices.purchase.hybrid = -500.0;

        let err = validate_compare(&valid_profile(), &prices, 7).unwrap_err();
        assert_eq!(err.field, "prices.purchase.hybrid");
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = validate_compare(&valid_profile(), &valid_prices(), 0).unwrap_err();
        assert_eq!(err.field, "horizon_years");
    }

    #[test]
    fn test_blank_addresses_rejected() {
        assert_eq!(
            validate_addresses("", "Berlin").unwrap_err().field,
            "origin"
        );
        assert_eq!(
            validate_addresses("Munich", "   ").unwrap_err().field,
            "destination"
        );
        assert!(validate_addresses("Munich", "Berlin").is_ok());
    }
}
