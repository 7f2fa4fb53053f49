// src/operations/mod.rs

//! Defines the operations a circuit can apply to the register state.
//!
//! The set is deliberately small: it is exactly what the carried circuits
//! need. Single-qubit unitaries (the Paulis, Hadamard, a Y rotation, and
//! state preparation), the controlled-NOT, and the Toffoli gate used for
//! majority-vote correction. Each variant carries the qubit IDs it acts on;
//! the simulation engine interprets the variant into a dense state-vector
//! update restricted to those qubits.

// Import necessary types from the core module
use crate::core::QubitId;
use num_complex::Complex;

/// One operation in a circuit's ordered sequence.
///
/// Every variant is unitary, so applying any sequence of them preserves the
/// state norm exactly (up to floating-point accumulation). Operations do not
/// commute in general; order within a circuit is load-bearing.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Loads the single-qubit pure state α|0⟩ + β|1⟩ onto `target`.
    ///
    /// Realized as the unitary [[α, −β̄], [β, ᾱ]], which sends |0⟩ to the
    /// requested state, so preparation is itself a unitary and the norm
    /// invariant holds at every step. Intended as the first operation on a
    /// qubit still in |0⟩; applied later it simply acts as that unitary.
    ///
    /// The engine rejects amplitude pairs with |α|² + |β|² off 1 beyond
    /// tolerance.
    Prepare {
        /// The qubit receiving the state.
        target: QubitId,
        /// Amplitude of |0⟩.
        alpha: Complex<f64>,
        /// Amplitude of |1⟩.
        beta: Complex<f64>,
    },

    /// Pauli X: flips the target's basis states (bit flip).
    PauliX {
        /// The flipped qubit.
        target: QubitId,
    },

    /// Pauli Y: simultaneous bit and phase flip.
    PauliY {
        /// The flipped qubit.
        target: QubitId,
    },

    /// Pauli Z: negates the |1⟩ amplitude (phase flip).
    PauliZ {
        /// The flipped qubit.
        target: QubitId,
    },

    /// Hadamard: maps the computational basis to the conjugate basis and
    /// back. The code's encoder uses it to turn bit-flip protection into
    /// phase-flip protection across the triples.
    Hadamard {
        /// The rotated qubit.
        target: QubitId,
    },

    /// Rotation about the Y axis by `theta`:
    /// [[cos(θ/2), −sin(θ/2)], [sin(θ/2), cos(θ/2)]].
    RotateY {
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Controlled-NOT: flips `target` on the basis states where `control`
    /// is |1⟩.
    ControlledNot {
        /// The qubit conditioning the flip.
        control: QubitId,
        /// The flipped qubit.
        target: QubitId,
    },

    /// Toffoli: flips `target` on the basis states where both controls are
    /// |1⟩. This is the majority-vote corrector: with the two syndrome
    /// ancillas as controls it flips the data qubit back exactly when both
    /// copies disagree with it.
    Toffoli {
        /// First control qubit.
        control_a: QubitId,
        /// Second control qubit.
        control_b: QubitId,
        /// The flipped qubit.
        target: QubitId,
    },
}

impl Operation {
    /// Returns all qubit IDs mentioned in the operation's parameters.
    /// Circuits use this to track the register a simulation must cover.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Prepare { target, .. }
            | Operation::PauliX { target }
            | Operation::PauliY { target }
            | Operation::PauliZ { target }
            | Operation::Hadamard { target }
            | Operation::RotateY { target, .. } => vec![*target],
            Operation::ControlledNot { control, target } => vec![*control, *target],
            Operation::Toffoli { control_a, control_b, target } => {
                vec![*control_a, *control_b, *target]
            }
        }
    }
}
