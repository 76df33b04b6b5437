//! Analysis report types.
//!
//! Non-finite EROEI values (pure producers) serialize as JSON `null`;
//! text renderers should print them as N/A.

use serde::{Deserialize, Serialize};

use crate::class::EnergyClass;

/// Per-component breakdown inside a [`SystemAnalysis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentAnalysis {
    pub name: String,
    #[serde(rename = "type")]
    pub class: EnergyClass,
    pub output_kwh_year: f64,
    pub input_kwh_year: f64,
    pub embodied_kwh: f64,
    pub lifespan_years: f64,
    pub annualized_embodied: f64,
    pub total_annual_input: f64,
    pub component_eroei: f64,
    pub notes: String,
}

/// Full analysis of an energy system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemAnalysis {
    pub system_name: String,
    pub total_output_kwh_year: f64,
    pub total_input_kwh_year: f64,
    pub net_energy_kwh_year: f64,
    pub system_eroei: f64,
    pub viability_assessment: String,
    pub meets_7_threshold: bool,
    pub meets_10_threshold: bool,
    pub components: Vec<ComponentAnalysis>,
}
