//! Energy component model.

use en_core::numeric::{ensure_finite, ratio_or_infinite};

use crate::class::EnergyClass;
use crate::error::{EnergyError, EnergyResult};

/// A single component of an energy system.
///
/// Holds the annual output and operational input, the one-time embodied
/// (manufacturing) energy, and the expected lifespan. The embodied energy
/// is amortized linearly across the lifespan, so the component's EROEI is
///
/// ```text
/// eroei = output / (input + embodied / lifespan)
/// ```
///
/// A component whose total annual input is zero or negative is a pure
/// producer and reports an infinite EROEI rather than an error.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyComponent {
    /// Human-readable name for reports.
    pub name: String,
    /// Component category.
    pub class: EnergyClass,
    /// Annual energy output (kWh/year).
    pub energy_output_kwh_year: f64,
    /// Annual operational energy input (kWh/year).
    pub energy_input_kwh_year: f64,
    /// One-time manufacturing energy (kWh).
    pub embodied_energy_kwh: f64,
    /// Expected lifespan (years), strictly positive.
    pub lifespan_years: f64,
    /// Conversion efficiency.
    pub efficiency: f64,
    /// Actual vs nameplate capacity.
    pub capacity_factor: f64,
    /// Free-text annotation carried into reports.
    pub notes: String,
}

impl EnergyComponent {
    /// Create a new component.
    ///
    /// Efficiency and capacity factor default to 1.0 and notes to empty;
    /// use the `with_*` methods to override them.
    ///
    /// # Errors
    /// Returns an error when the lifespan is not strictly positive or any
    /// energy quantity is non-finite. Negative energy values are accepted
    /// and flow into the derived metrics unchanged.
    pub fn new(
        name: impl Into<String>,
        class: EnergyClass,
        energy_output_kwh_year: f64,
        energy_input_kwh_year: f64,
        embodied_energy_kwh: f64,
        lifespan_years: f64,
    ) -> EnergyResult<Self> {
        check_finite(energy_output_kwh_year, "energy output")?;
        check_finite(energy_input_kwh_year, "energy input")?;
        check_finite(embodied_energy_kwh, "embodied energy")?;
        check_finite(lifespan_years, "lifespan")?;
        if lifespan_years <= 0.0 {
            return Err(EnergyError::InvalidArg {
                what: "lifespan must be positive",
            });
        }

        Ok(Self {
            name: name.into(),
            class,
            energy_output_kwh_year,
            energy_input_kwh_year,
            embodied_energy_kwh,
            lifespan_years,
            efficiency: 1.0,
            capacity_factor: 1.0,
            notes: String::new(),
        })
    }

    /// Set the conversion efficiency.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Set the capacity factor (actual vs nameplate).
    pub fn with_capacity_factor(mut self, capacity_factor: f64) -> Self {
        self.capacity_factor = capacity_factor;
        self
    }

    /// Attach a free-text note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Embodied energy amortized over the lifespan (kWh/year).
    pub fn annualized_embodied(&self) -> f64 {
        self.embodied_energy_kwh / self.lifespan_years
    }

    /// Total annual input including amortized embodied energy (kWh/year).
    pub fn total_annual_input(&self) -> f64 {
        self.energy_input_kwh_year + self.annualized_embodied()
    }

    /// EROEI for this component alone; infinite for a pure producer.
    pub fn component_eroei(&self) -> f64 {
        ratio_or_infinite(self.energy_output_kwh_year, self.total_annual_input())
    }
}

fn check_finite(value: f64, what: &'static str) -> EnergyResult<()> {
    ensure_finite(value, what).map_err(|_| EnergyError::NonPhysical { what })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn component(output: f64, input: f64, embodied: f64, lifespan: f64) -> EnergyComponent {
        EnergyComponent::new("c", EnergyClass::SolarPv, output, input, embodied, lifespan).unwrap()
    }

    #[test]
    fn derived_metrics() {
        let c = component(1000.0, 10.0, 250.0, 25.0);
        assert_relative_eq!(c.annualized_embodied(), 10.0);
        assert_relative_eq!(c.total_annual_input(), 20.0);
        assert_relative_eq!(c.component_eroei(), 50.0);
    }

    #[test]
    fn zero_input_is_infinite_eroei() {
        let c = component(1000.0, 0.0, 0.0, 25.0);
        assert_eq!(c.component_eroei(), f64::INFINITY);
    }

    #[test]
    fn negative_total_input_is_infinite_eroei() {
        // Negative operational input dominating the amortized embodied term.
        let c = component(1000.0, -100.0, 250.0, 25.0);
        assert!(c.total_annual_input() < 0.0);
        assert_eq!(c.component_eroei(), f64::INFINITY);
    }

    #[test]
    fn zero_lifespan_rejected() {
        let err = EnergyComponent::new("c", EnergyClass::Coal, 1.0, 1.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, EnergyError::InvalidArg { .. }));
        let err = EnergyComponent::new("c", EnergyClass::Coal, 1.0, 1.0, 1.0, -5.0).unwrap_err();
        assert!(matches!(err, EnergyError::InvalidArg { .. }));
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let err =
            EnergyComponent::new("c", EnergyClass::Coal, f64::NAN, 1.0, 1.0, 10.0).unwrap_err();
        assert!(matches!(err, EnergyError::NonPhysical { .. }));
    }

    #[test]
    fn builder_defaults() {
        let c = component(1.0, 1.0, 1.0, 1.0);
        assert_eq!(c.efficiency, 1.0);
        assert_eq!(c.capacity_factor, 1.0);
        assert!(c.notes.is_empty());

        let c = c.with_efficiency(0.9).with_capacity_factor(0.17).with_notes("n");
        assert_eq!(c.efficiency, 0.9);
        assert_eq!(c.capacity_factor, 0.17);
        assert_eq!(c.notes, "n");
    }

    proptest! {
        #[test]
        fn amortization_identity(
            output in 0.0f64..1e9,
            input in 0.0f64..1e9,
            embodied in 0.0f64..1e9,
            lifespan in 0.1f64..100.0,
        ) {
            let c = component(output, input, embodied, lifespan);
            prop_assert_eq!(c.annualized_embodied(), embodied / lifespan);
            prop_assert_eq!(c.total_annual_input(), input + embodied / lifespan);
        }

        #[test]
        fn eroei_is_ratio_or_infinite(
            output in 0.0f64..1e9,
            input in 0.0f64..1e9,
            embodied in 0.0f64..1e9,
            lifespan in 0.1f64..100.0,
        ) {
            let c = component(output, input, embodied, lifespan);
            let total = c.total_annual_input();
            if total <= 0.0 {
                prop_assert_eq!(c.component_eroei(), f64::INFINITY);
            } else {
                prop_assert_eq!(c.component_eroei(), output / total);
            }
        }
    }
}
