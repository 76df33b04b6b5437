//! en-energy: EROEI model for energy systems.
//!
//! Provides:
//! - `EnergyComponent`: an annotated producer or consumer with derived
//!   per-component EROEI ratios
//! - `EnergySystem`: an ordered collection of components with system-wide
//!   totals and a qualitative viability tier
//! - `SystemAnalysis`: the serializable analysis report
//! - a catalog of example systems (solar + storage, hyphal network)
//!
//! All energies are annual kWh unless a field name says otherwise.
//! A component whose total annual input is zero or negative has an
//! infinite EROEI (pure producer); a system with zero output over a
//! positive input has EROEI 0 (pure consumer).
//!
//! # Example
//!
//! ```
//! use en_energy::{EnergyClass, EnergyComponent, EnergySystem};
//!
//! let mut system = EnergySystem::new("Toy system");
//! system.add_component(
//!     EnergyComponent::new("Panel", EnergyClass::SolarPv, 1000.0, 10.0, 500.0, 25.0).unwrap(),
//! );
//! let analysis = system.analyze();
//! assert!(analysis.system_eroei > 7.0);
//! ```

pub mod catalog;
pub mod class;
pub mod component;
pub mod error;
pub mod report;
pub mod system;

// Re-exports
pub use catalog::{example_solar_system, hyphal_network_system, HyphalParams};
pub use class::{reference_eroei, EnergyClass};
pub use component::EnergyComponent;
pub use error::{EnergyError, EnergyResult};
pub use report::{ComponentAnalysis, SystemAnalysis};
pub use system::{EnergySystem, Viability};
