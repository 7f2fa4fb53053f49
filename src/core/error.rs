//! Error handling logic

use super::qubit::QubitId;
use std::fmt;

/// Errors surfaced by circuit construction, simulation, and the harness.
///
/// Every variant is a caller contract violation or a numerical invariant
/// breaking down. Nothing here is retried or masked: the simulation is a
/// deterministic function of its inputs, so a failure is surfaced
/// immediately to whoever supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QeccError {
    /// A state failed validation: non-unit preparation amplitudes, or a
    /// norm that drifted past tolerance.
    InvalidState {
        /// What the check found.
        message: String,
    },

    /// A structurally invalid operation or circuit: duplicate control and
    /// target indices, an empty circuit, an oversized register.
    InvalidOperation {
        /// What was invalid.
        message: String,
    },

    /// An operation or readout referenced a qubit the simulation was not
    /// initialized with.
    UnknownQubit {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Context for the failed lookup.
        message: String,
    },

    /// Harness case text that could not be decoded, or whose fields are
    /// outside their declared ranges.
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },
}

impl fmt::Display for QeccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QeccError::InvalidState { message } => write!(f, "Invalid State: {}", message),
            QeccError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
            QeccError::UnknownQubit { qubit, message } => write!(f, "Unknown Qubit ({}): {}", qubit, message),
            QeccError::InvalidInput { message } => write!(f, "Invalid Input: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QeccError {}
