// src/simulation/mod.rs

//! Simulates the execution of `qecc::circuits::Circuit` against the dense
//! state-vector engine. This module contains the `Simulator` entry point and
//! the internal `SimulationEngine` responsible for evolving the state.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::SimulationResult;

// Import necessary types for the Simulator struct and its methods
use crate::circuits::Circuit;
use crate::core::QeccError;
use engine::SimulationEngine;

/// The main simulator orchestrating the execution of circuits.
///
/// Each run owns one engine and one mutable state vector; there is no
/// ambient simulation context shared between runs. Execution is sequential,
/// deterministic, and bounded by the circuit's operation count.
#[derive(Default)]
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a simulation of the provided circuit.
    ///
    /// Initializes every involved qubit to |0⟩, applies the operation
    /// sequence in order, and hands back the final state for readout.
    ///
    /// # Arguments
    /// * `circuit` - The `Circuit` definition to simulate.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` carrying the final state and its readout
    ///   surface (expectations, probabilities, sampling).
    /// * `Err(QeccError)` for an empty circuit, a structurally invalid
    ///   operation, or a state-validation failure during preparation.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult, QeccError> {
        // A result always carries a final state, so there is nothing
        // meaningful to return for a circuit with no qubits.
        if circuit.is_empty() {
            return Err(QeccError::InvalidOperation {
                message: "cannot simulate an empty circuit".to_string(),
            });
        }

        let mut engine = SimulationEngine::init(circuit.qubits())?;

        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }

        Ok(engine.into_result())
    }
}
