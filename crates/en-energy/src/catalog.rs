//! Example system catalog.
//!
//! Two worked examples: a viable solar + storage + distribution system,
//! and a distributed compute network that produces no energy at all and
//! therefore fails every viability threshold.

use tracing::info;

use crate::class::EnergyClass;
use crate::component::EnergyComponent;
use crate::error::EnergyResult;
use crate::system::EnergySystem;

/// Example solar + storage + distribution system.
///
/// Figures assume a 1 MW mid-latitude array with 4 hours of battery
/// storage and local distribution. The resulting system EROEI clears the
/// 7:1 societal threshold.
pub fn example_solar_system() -> EnergyResult<EnergySystem> {
    let mut system = EnergySystem::new("Solar PV with Battery Storage");

    // 1 MW solar array, ~17% capacity factor
    system.add_component(
        EnergyComponent::new(
            "Solar PV Array (1 MW)",
            EnergyClass::SolarPv,
            1_500_000.0,
            10_000.0,
            1_500_000.0,
            25.0,
        )?
        .with_capacity_factor(0.17)
        .with_notes("Assumes mid-latitude location"),
    );

    // Battery storage, 4 hours
    system.add_component(
        EnergyComponent::new(
            "Battery Storage (4 MWh)",
            EnergyClass::BatteryStorage,
            1_350_000.0,
            5_000.0,
            800_000.0,
            15.0,
        )?
        .with_efficiency(0.90)
        .with_notes("Lithium-ion, 10% round-trip loss"),
    );

    system.add_component(
        EnergyComponent::new(
            "Distribution Network",
            EnergyClass::Distribution,
            1_282_500.0,
            2_000.0,
            200_000.0,
            40.0,
        )?
        .with_efficiency(0.95)
        .with_notes("Local distribution, 5% loss"),
    );

    Ok(system)
}

/// Sizing parameters for the hyphal network example.
#[derive(Debug, Clone, Copy)]
pub struct HyphalParams {
    pub num_nodes: usize,
    pub power_per_node_w: f64,
    pub network_overhead_factor: f64,
}

impl Default for HyphalParams {
    fn default() -> Self {
        Self {
            num_nodes: 1000,
            power_per_node_w: 100.0,
            network_overhead_factor: 1.2,
        }
    }
}

/// Energy cost model for a distributed hyphal compute network.
///
/// Both components are pure consumers, so the system EROEI is 0 and the
/// network needs an external energy source to be viable at all.
pub fn hyphal_network_system(params: HyphalParams) -> EnergyResult<EnergySystem> {
    let HyphalParams {
        num_nodes,
        power_per_node_w,
        network_overhead_factor,
    } = params;

    info!(num_nodes, power_per_node_w, "building hyphal network model");

    let mut system = EnergySystem::new(format!("Hyphal Network ({num_nodes} nodes)"));

    let hours_per_year = 8760.0;
    let node_energy_kwh = (power_per_node_w / 1000.0) * hours_per_year * num_nodes as f64;
    let network_energy_kwh = node_energy_kwh * (network_overhead_factor - 1.0);

    // ~500 kWh manufacturing energy per compute node
    system.add_component(
        EnergyComponent::new(
            format!("Computation Nodes ({num_nodes})"),
            EnergyClass::Computation,
            0.0,
            node_energy_kwh,
            num_nodes as f64 * 500.0,
            5.0,
        )?
        .with_notes("Spirit execution, VUDO VM runtime"),
    );

    system.add_component(
        EnergyComponent::new(
            "Network Infrastructure",
            EnergyClass::Network,
            0.0,
            network_energy_kwh,
            num_nodes as f64 * 50.0,
            10.0,
        )?
        .with_notes("P2P communication, consensus"),
    );

    Ok(system)
}
