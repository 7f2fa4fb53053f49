// src/simulation/engine.rs

use crate::core::{QeccError, QubitId, StateVector, tolerances};
use crate::operations::Operation;
use crate::simulation::SimulationResult;
use num_complex::Complex;
use num_traits::Zero;
use std::collections::{HashMap, HashSet};

/// The dense state-vector engine evolving the joint register state.
///
/// Qubit IDs are sorted and assigned indices 0..N-1; index 0 occupies the
/// most significant bit of a basis-state index, so a basis state reads
/// |q0 q1 ... q(n-1)⟩ left to right. Every operation is interpreted into an
/// update touching only the amplitudes of the acted-on qubits.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Maps qubit IDs to their index (0..N-1) in the sorted order used for
    /// the global state vector.
    qubit_indices: HashMap<QubitId, usize>,
    /// The global state vector over all simulated qubits, dimension 2^N.
    state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine for a given set of qubits, all in |0⟩.
    pub(crate) fn init(qubit_ids: &HashSet<QubitId>) -> Result<Self, QeccError> {
        if qubit_ids.is_empty() {
            return Err(QeccError::InvalidOperation {
                message: "cannot initialize a simulation engine with zero qubits".to_string(),
            });
        }

        let num_qubits = qubit_ids.len();
        let dim = 1usize.checked_shl(num_qubits as u32).ok_or_else(|| QeccError::InvalidOperation {
            message: "register too large: state vector dimension overflows usize".to_string(),
        })?;

        // Sort IDs to ensure deterministic index assignment regardless of
        // HashSet iteration order.
        let mut sorted_ids: Vec<QubitId> = qubit_ids.iter().copied().collect();
        sorted_ids.sort();
        let mut qubit_indices = HashMap::with_capacity(num_qubits);
        for (index, qubit_id) in sorted_ids.into_iter().enumerate() {
            qubit_indices.insert(qubit_id, index);
        }

        // |0...0⟩: amplitude 1.0 at index 0, rest 0.
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);

        Ok(Self {
            qubit_indices,
            state: StateVector::new(amplitudes),
            num_qubits,
        })
    }

    /// Read access to the current state.
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    // Crate-visible method to set the state directly for testing.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QeccError> {
        if state.dim() != self.state.dim() {
            Err(QeccError::InvalidState {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }

    /// Consumes the engine into a result carrying the final state.
    pub(crate) fn into_result(self) -> SimulationResult {
        SimulationResult::new(self.qubit_indices, self.state)
    }

    /// Applies a single operation to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QeccError> {
        match op {
            Operation::Prepare { target, alpha, beta } => {
                let target_idx = self.qubit_index(target)?;
                let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
                if (norm_sqr - 1.0).abs() > tolerances::NORM {
                    return Err(QeccError::InvalidState {
                        message: format!(
                            "preparation amplitudes are not a unit vector: |α|² + |β|² = {}",
                            norm_sqr
                        ),
                    });
                }
                // The unitary sending |0⟩ to α|0⟩ + β|1⟩.
                let matrix = [[*alpha, -beta.conj()], [*beta, alpha.conj()]];
                self.apply_single_qubit_gate(target_idx, &matrix);
            }
            Operation::PauliX { target } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &pauli_x_matrix());
            }
            Operation::PauliY { target } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &pauli_y_matrix());
            }
            Operation::PauliZ { target } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &pauli_z_matrix());
            }
            Operation::Hadamard { target } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &hadamard_matrix());
            }
            Operation::RotateY { target, theta } => {
                let target_idx = self.qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &rotate_y_matrix(*theta));
            }
            Operation::ControlledNot { control, target } => {
                let control_idx = self.qubit_index(control)?;
                let target_idx = self.qubit_index(target)?;
                if control_idx == target_idx {
                    return Err(QeccError::InvalidOperation {
                        message: "control and target qubits cannot be the same for a controlled operation".to_string(),
                    });
                }
                self.apply_controlled_flip(&[control_idx], target_idx);
            }
            Operation::Toffoli { control_a, control_b, target } => {
                let a_idx = self.qubit_index(control_a)?;
                let b_idx = self.qubit_index(control_b)?;
                let target_idx = self.qubit_index(target)?;
                if a_idx == b_idx || a_idx == target_idx || b_idx == target_idx {
                    return Err(QeccError::InvalidOperation {
                        message: "Toffoli controls and target must be three distinct qubits".to_string(),
                    });
                }
                self.apply_controlled_flip(&[a_idx, b_idx], target_idx);
            }
        };
        Ok(())
    }

    /// Helper to get a qubit's index, returning a specific error if not found.
    fn qubit_index(&self, qubit_id: &QubitId) -> Result<usize, QeccError> {
        self.qubit_indices.get(qubit_id).copied().ok_or_else(|| QeccError::UnknownQubit {
            qubit: *qubit_id,
            message: "not part of this simulation".to_string(),
        })
    }

    // --- State Manipulation Helper Methods ---

    /// Applies a 2x2 unitary to a single qubit within the global state
    /// vector, pairing the basis states that differ only at that qubit's
    /// bit position.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let k = self.num_qubits - 1 - target_idx; // Bit position (from right, 0-based)
        let k_mask = 1usize << k;
        let lower_mask = k_mask - 1; // Mask for bits to the right of the target
        let dim = self.state.dim();
        let mut new_amps = vec![Complex::zero(); dim];

        // Iterate over pairs of basis states differing only at the target bit:
        // spread i over the non-target bits, inserting 0 or 1 at position k.
        for i in 0..dim / 2 {
            let i0 = ((i & !lower_mask) << 1) | (i & lower_mask);
            let i1 = i0 | k_mask;

            let psi_0 = self.state.amplitudes()[i0];
            let psi_1 = self.state.amplitudes()[i1];

            new_amps[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_amps[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(new_amps);
    }

    /// Flips the target bit on every basis state whose control bits are all
    /// set. CNOT and Toffoli are basis permutations, so this is a plain
    /// in-place amplitude swap with no matrix arithmetic.
    fn apply_controlled_flip(&mut self, control_indices: &[usize], target_idx: usize) {
        let n = self.num_qubits;
        let target_mask = 1usize << (n - 1 - target_idx);
        let control_mask = control_indices
            .iter()
            .fold(0usize, |acc, &idx| acc | (1usize << (n - 1 - idx)));

        let dim = self.state.dim();
        let amps = self.state.amplitudes_mut();
        for index in 0..dim {
            // Visit each swapped pair once, from its target=0 member.
            if index & control_mask == control_mask && index & target_mask == 0 {
                amps.swap(index, index | target_mask);
            }
        }
    }
}

// --- Gate matrices ---

fn pauli_x_matrix() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::zero(), Complex::new(1.0, 0.0)],
        [Complex::new(1.0, 0.0), Complex::zero()],
    ]
}

fn pauli_y_matrix() -> [[Complex<f64>; 2]; 2] {
    let i = Complex::i();
    [[Complex::zero(), -i], [i, Complex::zero()]]
}

fn pauli_z_matrix() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::new(1.0, 0.0), Complex::zero()],
        [Complex::zero(), Complex::new(-1.0, 0.0)],
    ]
}

fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    let h = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// Ry(theta) = [[cos(a), -sin(a)], [sin(a), cos(a)]] where a = theta/2.
fn rotate_y_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let cos_a = half.cos();
    let sin_a = half.sin();
    [
        [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
        [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
    ]
}
