// src/lib.rs

//! `qecc` - coherent simulation of the Shor nine-qubit error-correcting code
//!
//! The crate bundles a small dense state-vector simulator with the circuits
//! it exists to run: the nine-qubit code (encode, inject one Pauli fault,
//! decode, majority-vote correct, read per-qubit Z expectations) and a
//! two-qubit clock-face encoding, plus the JSON literal-test harness the
//! originals were exercised against.
//!
//! Correction is fully unitary: no measurement, no classical feedback. For
//! any of the 27 (fault kind, faulted qubit) combinations the logical state
//! on qubit 0 comes out restored up to global phase.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex;
//! use qecc::circuits::shor::{self, ErrorKind, Fault};
//! use qecc::{QeccError, QubitId, Simulator};
//!
//! fn main() -> Result<(), QeccError> {
//!     // Logical |1⟩, bit flip injected on qubit 3.
//!     let fault = Fault::new(ErrorKind::BitFlip, QubitId(3))?;
//!     let circuit = shor::circuit(
//!         [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
//!         Some(fault),
//!     );
//!
//!     let result = Simulator::new().run(&circuit)?;
//!
//!     // Qubit 0 reads as the logical state again: ⟨Z⟩ = -1.
//!     let restored = result.expectation_z(QubitId(0))?;
//!     assert!((restored + 1.0).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod harness;

// Re-export the most common types for easier top-level use
// (self:: keeps the local module from clashing with the `core` crate)
pub use self::core::{QeccError, QubitId, StateVector};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{SimulationResult, Simulator};
pub use validation::{
    check_normalization,
    is_product_state,
    purity,
    reduced_density_matrix,
};
pub use harness::{ClockCase, ShorCase, allclose, outputs_match};
