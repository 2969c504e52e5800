//! Total-cost-of-ownership core
//!
//! Pure, synchronous arithmetic over typed inputs: no I/O, no randomness,
//! no shared state. Given identical inputs the functions here always
//! produce identical outputs, which is what makes the surrounding service
//! testable without any network in sight.

use std::cmp::Ordering;

use crate::models::vehicle::{
    CostResult, DrivingProfile, FuelEconomy, PriceSheet, VehicleVariant,
};

const WEEKS_PER_YEAR: f64 = 52.0;
const WORKDAYS_PER_WEEK: f64 = 5.0;

/// Annual distance split into city and highway components, in km
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSplit {
    pub city_km: f64,
    pub highway_km: f64,
}

impl DistanceSplit {
    pub fn total(&self) -> f64 {
        self.city_km + self.highway_km
    }
}

/// Derive the annual city/highway distance split from a driving profile
///
/// An explicit positive annual total is split proportionally by the
/// route-mix fractions. Otherwise the total is derived from the weekday
/// commute (round trip, five days, 52 weeks) plus the weekend round trip
/// (52 weeks), each contribution multiplied by the preset's fractions.
pub fn annual_distance_split(profile: &DrivingProfile) -> DistanceSplit {
    let mix = profile.route_mix;

    if profile.annual_km > 0.0 {
        return DistanceSplit {
            city_km: profile.annual_km * mix.city_fraction(),
            highway_km: profile.annual_km * mix.highway_fraction(),
        };
    }

    let weekday_km = profile.commute_km * 2.0 * WORKDAYS_PER_WEEK * WEEKS_PER_YEAR;
    let weekend_km = profile.weekend_trip_km * WEEKS_PER_YEAR;

    DistanceSplit {
        city_km: weekday_km * mix.city_fraction() + weekend_km * mix.city_fraction(),
        highway_km: weekday_km * mix.highway_fraction() + weekend_km * mix.highway_fraction(),
    }
}

/// Annual fuel/energy cost for one vehicle over the given distance split
///
/// Conventional variants (and the non-plug-in hybrid, which burns
/// gasoline) price city and highway consumption at their fuel's unit
/// price. The plug-in hybrid is special-cased: city driving runs partly
/// electric and partly on a residual gasoline draw, highway driving is
/// all gasoline.
fn annual_fuel_cost(split: DistanceSplit, economy: &FuelEconomy, prices: &PriceSheet) -> f64 {
    match economy.variant {
        VehicleVariant::PluginHybrid => {
            let city_electric = split.city_km / 100.0 * economy.city_kwh * prices.electricity;
            let city_fuel = split.city_km / 100.0 * economy.city * prices.gasoline;
            let highway_fuel = split.highway_km / 100.0 * economy.highway * prices.gasoline;
            city_electric + city_fuel + highway_fuel
        }
        variant => {
            let unit_price = prices.fuel_price(variant);
            let city = split.city_km / 100.0 * economy.city * unit_price;
            let highway = split.highway_km / 100.0 * economy.highway * unit_price;
            city + highway
        }
    }
}

/// Compute per-variant ownership costs, ranked ascending by total cost
///
/// The gasoline record, when present, is the amortization baseline: a
/// variant gets an amortization period only when it costs more to buy
/// than the baseline AND its annual cost undercuts the baseline's.
/// Without a gasoline record the comparison is skipped for everyone.
/// A partial or reordered record set is tolerated; missing variants
/// simply produce no result.
pub fn compute_costs(
    profile: &DrivingProfile,
    records: &[FuelEconomy],
    prices: &PriceSheet,
    horizon_years: u32,
) -> Vec<CostResult> {
    let split = annual_distance_split(profile);
    let annual_km = split.total();

    let baseline = records
        .iter()
        .filter(|r| r.variant == VehicleVariant::Gasoline)
        .last()
        .map(|r| {
            (
                prices.purchase.for_variant(VehicleVariant::Gasoline),
                annual_fuel_cost(split, r, prices),
            )
        });

    let mut results: Vec<CostResult> = records
        .iter()
        .map(|record| {
            let annual_cost = annual_fuel_cost(split, record, prices);
            let purchase_price = prices.purchase.for_variant(record.variant);

            let amortization_years = match baseline {
                Some((base_purchase, base_annual))
                    if record.variant != VehicleVariant::Gasoline =>
                {
                    let premium = purchase_price - base_purchase;
                    let savings = base_annual - annual_cost;
                    if premium > 0.0 && savings > 0.0 {
                        Some(premium / savings)
                    } else {
                        None
                    }
                }
                _ => None,
            };

            CostResult {
                variant: record.variant,
                name: record.name.clone(),
                annual_cost,
                purchase_price,
                total_cost: purchase_price + annual_cost * f64::from(horizon_years),
                amortization_years,
                annual_km,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        a.total_cost
            .partial_cmp(&b.total_cost)
            .unwrap_or(Ordering::Equal)
    });

    results
}
