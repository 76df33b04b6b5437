//! Component categories and literature reference ranges.

use serde::{Deserialize, Serialize};

/// Category of an energy system component.
///
/// Covers generation, storage, transport, and the two pure-consumer
/// classes (computation and network infrastructure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyClass {
    SolarPv,
    WindOnshore,
    WindOffshore,
    Hydro,
    Geothermal,
    NaturalGas,
    Coal,
    OilConventional,
    OilTight,
    Nuclear,
    Biomass,
    BatteryStorage,
    Distribution,
    Computation,
    Network,
}

impl EnergyClass {
    /// Serialized tag for this class (matches the JSON `type` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyClass::SolarPv => "solar_pv",
            EnergyClass::WindOnshore => "wind_onshore",
            EnergyClass::WindOffshore => "wind_offshore",
            EnergyClass::Hydro => "hydro",
            EnergyClass::Geothermal => "geothermal",
            EnergyClass::NaturalGas => "natural_gas",
            EnergyClass::Coal => "coal",
            EnergyClass::OilConventional => "oil_conventional",
            EnergyClass::OilTight => "oil_tight",
            EnergyClass::Nuclear => "nuclear",
            EnergyClass::Biomass => "biomass",
            EnergyClass::BatteryStorage => "battery_storage",
            EnergyClass::Distribution => "distribution",
            EnergyClass::Computation => "computation",
            EnergyClass::Network => "network",
        }
    }

    /// True for classes that never produce energy themselves.
    pub fn is_pure_consumer(&self) -> bool {
        matches!(self, EnergyClass::Computation | EnergyClass::Network)
    }
}

impl std::fmt::Display for EnergyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literature EROEI range (low, high) for a component class.
///
/// Battery storage and distribution entries are round-trip/transmission
/// efficiencies rather than EROEI values. Pure consumers are (0, 0) and
/// need an external energy source.
pub fn reference_eroei(class: EnergyClass) -> (f64, f64) {
    match class {
        EnergyClass::SolarPv => (10.0, 20.0),
        EnergyClass::WindOnshore => (15.0, 25.0),
        EnergyClass::WindOffshore => (10.0, 18.0),
        EnergyClass::Hydro => (40.0, 60.0),
        EnergyClass::Geothermal => (5.0, 15.0),
        EnergyClass::NaturalGas => (15.0, 25.0),
        EnergyClass::Coal => (20.0, 50.0),
        EnergyClass::OilConventional => (10.0, 20.0),
        EnergyClass::OilTight => (5.0, 10.0),
        EnergyClass::Nuclear => (10.0, 15.0),
        EnergyClass::Biomass => (2.0, 5.0),
        EnergyClass::BatteryStorage => (0.85, 0.95),
        EnergyClass::Distribution => (0.9, 0.98),
        EnergyClass::Computation => (0.0, 0.0),
        EnergyClass::Network => (0.0, 0.0),
    }
}
