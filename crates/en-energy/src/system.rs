//! Energy system aggregation and viability tiers.

use en_core::numeric::ratio_or_infinite;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::EnergyComponent;
use crate::report::{ComponentAnalysis, SystemAnalysis};

/// Societal viability tier for a system EROEI value.
///
/// Boundaries are inclusive at the lower bound: an EROEI of exactly 7.0
/// is `Marginal`, exactly 20.0 is `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viability {
    Excellent,
    Good,
    Marginal,
    Critical,
    Subsistence,
    NonViable,
}

impl Viability {
    /// Tier for a given system EROEI.
    pub fn from_eroei(eroei: f64) -> Self {
        if eroei >= 20.0 {
            Viability::Excellent
        } else if eroei >= 12.0 {
            Viability::Good
        } else if eroei >= 7.0 {
            Viability::Marginal
        } else if eroei >= 5.0 {
            Viability::Critical
        } else if eroei >= 3.0 {
            Viability::Subsistence
        } else {
            Viability::NonViable
        }
    }

    /// Full assessment label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Viability::Excellent => "Excellent - Supports complex technology development",
            Viability::Good => "Good - Supports education, healthcare, R&D",
            Viability::Marginal => "Marginal - Can maintain infrastructure",
            Viability::Critical => "Critical - Basic industrial activity only",
            Viability::Subsistence => "Subsistence - Basic agriculture only",
            Viability::NonViable => "Non-viable - Cannot sustain society",
        }
    }
}

impl std::fmt::Display for Viability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete energy system: a named, ordered collection of components.
///
/// Components are appended with [`EnergySystem::add_component`] and never
/// removed; every derived metric is a fold over the current components.
#[derive(Debug, Clone, Default)]
pub struct EnergySystem {
    pub name: String,
    components: Vec<EnergyComponent>,
}

impl EnergySystem {
    /// Create an empty system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Append a component.
    pub fn add_component(&mut self, component: EnergyComponent) {
        self.components.push(component);
    }

    /// Components in insertion order.
    pub fn components(&self) -> &[EnergyComponent] {
        &self.components
    }

    /// Total system energy output (kWh/year).
    pub fn total_output(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.energy_output_kwh_year)
            .sum()
    }

    /// Total system energy input including amortized embodied (kWh/year).
    pub fn total_input(&self) -> f64 {
        self.components.iter().map(|c| c.total_annual_input()).sum()
    }

    /// System-wide EROEI; infinite when total input is zero or negative.
    pub fn system_eroei(&self) -> f64 {
        ratio_or_infinite(self.total_output(), self.total_input())
    }

    /// Net energy available for useful work (kWh/year).
    pub fn net_energy(&self) -> f64 {
        self.total_output() - self.total_input()
    }

    /// Whether the system EROEI meets a minimum societal threshold.
    pub fn is_viable(&self, threshold: f64) -> bool {
        self.system_eroei() >= threshold
    }

    /// Viability tier for the current system EROEI.
    pub fn viability(&self) -> Viability {
        Viability::from_eroei(self.system_eroei())
    }

    /// Comprehensive system analysis, ready for rendering or JSON dump.
    pub fn analyze(&self) -> SystemAnalysis {
        let eroei = self.system_eroei();
        debug!(
            system = %self.name,
            components = self.components.len(),
            eroei,
            "analyzing energy system"
        );

        let components = self
            .components
            .iter()
            .map(|c| ComponentAnalysis {
                name: c.name.clone(),
                class: c.class,
                output_kwh_year: c.energy_output_kwh_year,
                input_kwh_year: c.energy_input_kwh_year,
                embodied_kwh: c.embodied_energy_kwh,
                lifespan_years: c.lifespan_years,
                annualized_embodied: c.annualized_embodied(),
                total_annual_input: c.total_annual_input(),
                component_eroei: c.component_eroei(),
                notes: c.notes.clone(),
            })
            .collect();

        SystemAnalysis {
            system_name: self.name.clone(),
            total_output_kwh_year: self.total_output(),
            total_input_kwh_year: self.total_input(),
            net_energy_kwh_year: self.net_energy(),
            system_eroei: eroei,
            viability_assessment: self.viability().label().to_string(),
            meets_7_threshold: self.is_viable(7.0),
            meets_10_threshold: self.is_viable(10.0),
            components,
        }
    }
}
