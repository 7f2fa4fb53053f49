// src/circuits/shor.rs

//! The Shor nine-qubit error-correcting code, simulated coherently.
//!
//! The code nests two three-qubit repetition codes. Encoding first copies
//! the logical qubit across the block heads 0, 3, 6 (repetition against
//! phase flips), rotates the heads into the conjugate basis, then copies
//! each head to its two block partners (repetition against bit flips within
//! each of the blocks {0,1,2}, {3,4,5}, {6,7,8}). The result tolerates one
//! arbitrary single-qubit fault anywhere in the register.
//!
//! Recovery is entirely unitary: no measurement, no classical feedback.
//! Re-applying the in-block copies folds each block's bit-flip syndrome into
//! its ancilla pair; a Toffoli per block then performs the three-way
//! majority vote that flips the head back when both of its copies disagree
//! with it. Undoing the basis change and the inter-block copies exposes the
//! phase-flip syndrome the same way, and a final Toffoli across the heads
//! votes it away. The faulted qubit's syndrome stays behind in the ancillas;
//! the logical state on qubit 0 comes out restored up to global phase.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::{QeccError, QubitId};
use crate::operations::Operation;
use num_complex::Complex;

/// Number of physical qubits in the code.
pub const CODE_QUBITS: u64 = 9;

/// First qubit of each three-qubit repetition block.
const BLOCK_HEADS: [u64; 3] = [0, 3, 6];

/// The qubit carrying the logical state. Qubits 1–8 are ancillas created by
/// encoding.
pub fn logical_qubit() -> QubitId {
    QubitId(0)
}

/// The three single-qubit fault types the code corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bit flip (Pauli X).
    BitFlip,
    /// Simultaneous bit and phase flip (Pauli Y).
    BitPhaseFlip,
    /// Phase flip (Pauli Z).
    PhaseFlip,
}

impl ErrorKind {
    /// Decodes the integer key used by the challenge inputs:
    /// 0 → bit flip, 1 → combined bit-and-phase flip, 2 → phase flip.
    pub fn from_key(key: u8) -> Result<Self, QeccError> {
        match key {
            0 => Ok(ErrorKind::BitFlip),
            1 => Ok(ErrorKind::BitPhaseFlip),
            2 => Ok(ErrorKind::PhaseFlip),
            _ => Err(QeccError::InvalidInput {
                message: format!("error key {} is outside 0..=2", key),
            }),
        }
    }

    /// The Pauli operation realizing this fault on `target`.
    pub fn operation(self, target: QubitId) -> Operation {
        match self {
            ErrorKind::BitFlip => Operation::PauliX { target },
            ErrorKind::BitPhaseFlip => Operation::PauliY { target },
            ErrorKind::PhaseFlip => Operation::PauliZ { target },
        }
    }
}

/// One injected single-qubit fault: which kind, and on which of the nine
/// qubits. The correction handles all 27 combinations, ancilla targets
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    /// The fault type.
    pub kind: ErrorKind,
    /// The faulted qubit, anywhere in 0..9.
    pub target: QubitId,
}

impl Fault {
    /// Builds a fault, rejecting targets outside the register.
    pub fn new(kind: ErrorKind, target: QubitId) -> Result<Self, QeccError> {
        if target.0 >= CODE_QUBITS {
            return Err(QeccError::InvalidInput {
                message: format!("{} is outside the nine-qubit register", target),
            });
        }
        Ok(Self { kind, target })
    }
}

fn cnot(control: u64, target: u64) -> Operation {
    Operation::ControlledNot {
        control: QubitId(control),
        target: QubitId(target),
    }
}

/// Operations turning qubit 0's state into the nine-qubit codeword.
///
/// Order is load-bearing: the inter-block copies must precede the basis
/// change, which must precede the in-block copies.
pub fn encoding_ops() -> Vec<Operation> {
    let mut ops = Vec::with_capacity(11);
    // Replicate the logical state across the block heads.
    for head in [3, 6] {
        ops.push(cnot(0, head));
    }
    for head in BLOCK_HEADS {
        ops.push(Operation::Hadamard { target: QubitId(head) });
    }
    // In-block repetition against bit flips.
    for head in BLOCK_HEADS {
        ops.push(cnot(head, head + 1));
        ops.push(cnot(head, head + 2));
    }
    ops
}

/// Operations extracting both syndromes and undoing a single fault.
///
/// Mirrors the encoder step by step: in-block copies fold the bit-flip
/// syndrome into each ancilla pair, a Toffoli per block majority-votes the
/// head, the basis change and inter-block copies are undone, and a final
/// Toffoli across the heads majority-votes the phase-flip syndrome.
pub fn recovery_ops() -> Vec<Operation> {
    let mut ops = Vec::with_capacity(15);
    for head in BLOCK_HEADS {
        ops.push(cnot(head, head + 1));
        ops.push(cnot(head, head + 2));
    }
    for head in BLOCK_HEADS {
        ops.push(Operation::Toffoli {
            control_a: QubitId(head + 1),
            control_b: QubitId(head + 2),
            target: QubitId(head),
        });
    }
    for head in BLOCK_HEADS {
        ops.push(Operation::Hadamard { target: QubitId(head) });
    }
    for head in [3, 6] {
        ops.push(cnot(0, head));
    }
    ops.push(Operation::Toffoli {
        control_a: QubitId(3),
        control_b: QubitId(6),
        target: QubitId(0),
    });
    ops
}

/// The full pipeline: prepare qubit 0 with the given amplitudes, encode,
/// optionally inject one fault, recover.
///
/// Measurement is not part of the circuit; run it through a
/// [`crate::simulation::Simulator`] and read Z expectations off the result.
pub fn circuit(initial: [Complex<f64>; 2], fault: Option<Fault>) -> Circuit {
    let mut builder = CircuitBuilder::new()
        .add_op(Operation::Prepare {
            target: logical_qubit(),
            alpha: initial[0],
            beta: initial[1],
        })
        .add_ops(encoding_ops());
    if let Some(fault) = fault {
        builder = builder.add_op(fault.kind.operation(fault.target));
    }
    builder.add_ops(recovery_ops()).build()
}
