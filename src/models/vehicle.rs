use serde::{Deserialize, Serialize};
use std::fmt;

/// The five supported powertrain variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleVariant {
    Gasoline,
    Diesel,
    Lpg,
    Hybrid,
    PluginHybrid,
}

impl VehicleVariant {
    pub const ALL: [VehicleVariant; 5] = [
        VehicleVariant::Gasoline,
        VehicleVariant::Diesel,
        VehicleVariant::Lpg,
        VehicleVariant::Hybrid,
        VehicleVariant::PluginHybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Diesel => "diesel",
            Self::Lpg => "lpg",
            Self::Hybrid => "hybrid",
            Self::PluginHybrid => "plugin_hybrid",
        }
    }
}

impl fmt::Display for VehicleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed city/highway distance-fraction presets
///
/// Fractions are constants, not user-adjustable per call. Each preset's
/// fractions sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMix {
    Urban,
    Mixed,
    Highway,
}

impl RouteMix {
    /// Fraction of annual distance driven in the city
    pub fn city_fraction(&self) -> f64 {
        match self {
            Self::Urban => 0.8,
            Self::Mixed => 0.5,
            Self::Highway => 0.2,
        }
    }

    /// Fraction of annual distance driven on the highway
    pub fn highway_fraction(&self) -> f64 {
        match self {
            Self::Urban => 0.2,
            Self::Mixed => 0.5,
            Self::Highway => 0.8,
        }
    }
}

/// Driving habits supplied by the user
///
/// A positive `annual_km` overrides the weekday/weekend derivation
/// entirely; otherwise the annual distance is derived from the commute
/// and weekend-trip pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingProfile {
    /// Explicit annual distance total in km (0 = derive from pattern)
    #[serde(default)]
    pub annual_km: f64,
    /// Weekday one-way commute distance in km
    #[serde(default)]
    pub commute_km: f64,
    /// Weekend round-trip distance in km
    #[serde(default)]
    pub weekend_trip_km: f64,
    pub route_mix: RouteMix,
}

/// Consumption figures for one vehicle variant
///
/// `city`/`highway` are in L/100 km. `city_kwh` (kWh/100 km) is only
/// meaningful for the plug-in hybrid; all other variants carry zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelEconomy {
    pub name: String,
    pub variant: VehicleVariant,
    pub city: f64,
    pub highway: f64,
    #[serde(default)]
    pub city_kwh: f64,
}

/// Per-unit fuel/energy prices plus purchase price per variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSheet {
    /// Price per liter of gasoline
    pub gasoline: f64,
    /// Price per liter of diesel
    pub diesel: f64,
    /// Price per liter of LPG
    pub lpg: f64,
    /// Price per kWh of electricity
    pub electricity: f64,
    pub purchase: PurchasePrices,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchasePrices {
    pub gasoline: f64,
    pub diesel: f64,
    pub lpg: f64,
    pub hybrid: f64,
    pub plugin_hybrid: f64,
}

impl PriceSheet {
    /// Unit price of the fuel a variant burns
    ///
    /// The hybrid runs on gasoline; the plug-in hybrid's residual fuel
    /// draw is also gasoline (its electric share is priced separately).
    pub fn fuel_price(&self, variant: VehicleVariant) -> f64 {
        match variant {
            VehicleVariant::Diesel => self.diesel,
            VehicleVariant::Lpg => self.lpg,
            VehicleVariant::Gasoline | VehicleVariant::Hybrid | VehicleVariant::PluginHybrid => {
                self.gasoline
            }
        }
    }
}

impl PurchasePrices {
    pub fn for_variant(&self, variant: VehicleVariant) -> f64 {
        match variant {
            VehicleVariant::Gasoline => self.gasoline,
            VehicleVariant::Diesel => self.diesel,
            VehicleVariant::Lpg => self.lpg,
            VehicleVariant::Hybrid => self.hybrid,
            VehicleVariant::PluginHybrid => self.plugin_hybrid,
        }
    }
}

/// One vehicle's computed cost figures
///
/// Created fresh per calculation request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResult {
    pub variant: VehicleVariant,
    pub name: String,
    /// Annual fuel/energy cost
    pub annual_cost: f64,
    pub purchase_price: f64,
    /// Purchase price plus annual cost over the ownership horizon
    pub total_cost: f64,
    /// Years until fuel savings offset the purchase premium over the
    /// gasoline baseline; `None` when the variant never pays back
    pub amortization_years: Option<f64>,
    /// Annual distance the computation used, in km
    pub annual_km: f64,
}
