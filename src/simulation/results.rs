// src/simulation/results.rs

use crate::core::{QeccError, QubitId, StateVector};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The final state of a simulation run, plus its readout surface.
///
/// Readout never mutates the stored state: expectation values and basis
/// probabilities are ideal noiseless reads (a physical device would collapse
/// the state; this simulator does not), and even sampling only draws an
/// outcome without collapsing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Maps qubit IDs to their index in the basis ordering.
    qubit_indices: HashMap<QubitId, usize>,
    /// The state after the last operation.
    state: StateVector,
    /// Number of qubits simulated.
    num_qubits: usize,
}

impl SimulationResult {
    /// Wraps the engine's final state. (Internal visibility)
    pub(crate) fn new(qubit_indices: HashMap<QubitId, usize>, state: StateVector) -> Self {
        let num_qubits = qubit_indices.len();
        Self {
            qubit_indices,
            state,
            num_qubits,
        }
    }

    /// The final state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Number of qubits the run covered.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Qubit IDs in basis order (most significant bit first).
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut ids: Vec<QubitId> = self.qubit_indices.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Expectation value of the Z observable on one qubit: the probability-
    /// weighted average of +1 over basis states where its bit is 0 and -1
    /// where it is 1. Always in [-1, 1].
    pub fn expectation_z(&self, qubit: QubitId) -> Result<f64, QeccError> {
        let index = self.qubit_indices.get(&qubit).copied().ok_or_else(|| {
            QeccError::UnknownQubit {
                qubit,
                message: "not part of this simulation's readout".to_string(),
            }
        })?;
        Ok(self.expectation_z_at(index))
    }

    /// Z expectation for every qubit, in basis order.
    pub fn z_expectations(&self) -> Vec<f64> {
        self.qubits()
            .into_iter()
            .map(|id| self.expectation_z_at(self.qubit_indices[&id]))
            .collect()
    }

    fn expectation_z_at(&self, index: usize) -> f64 {
        let bit_mask = 1usize << (self.num_qubits - 1 - index);
        let mut expectation = 0.0;
        for (basis_index, amplitude) in self.state.amplitudes().iter().enumerate() {
            let weight = amplitude.norm_sqr();
            if basis_index & bit_mask == 0 {
                expectation += weight;
            } else {
                expectation -= weight;
            }
        }
        expectation
    }

    /// Probability of each joint basis state, in basis-index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.amplitudes().iter().map(|a| a.norm_sqr()).collect()
    }

    /// Draws one joint basis outcome, weighted by probability, and returns
    /// the per-qubit bit values in basis order.
    ///
    /// The generator is seeded from the state's bytes, so a given final
    /// state always samples the same outcome. The stored state is left
    /// untouched.
    pub fn sample_outcomes(&self) -> Vec<(QubitId, u64)> {
        let amplitudes = self.state.amplitudes();

        let seed = {
            let mut hasher = DefaultHasher::new();
            for amplitude in amplitudes {
                amplitude.re.to_ne_bytes().hash(&mut hasher);
                amplitude.im.to_ne_bytes().hash(&mut hasher);
            }
            hasher.finish()
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let draw: f64 = rng.random::<f64>();
        let mut cumulative = 0.0;
        // Fall back to the last index if accumulation lands short of 1.
        let mut chosen = amplitudes.len() - 1;
        for (index, amplitude) in amplitudes.iter().enumerate() {
            cumulative += amplitude.norm_sqr();
            if draw < cumulative {
                chosen = index;
                break;
            }
        }

        self.qubits()
            .into_iter()
            .map(|id| {
                let bit_pos = self.num_qubits - 1 - self.qubit_indices[&id];
                (id, ((chosen >> bit_pos) & 1) as u64)
            })
            .collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation result ({} qubits):", self.num_qubits)?;
        for (id, value) in self.qubits().into_iter().zip(self.z_expectations()) {
            writeln!(f, "  {}: ⟨Z⟩ = {:+.4}", id, value)?;
        }
        Ok(())
    }
}
