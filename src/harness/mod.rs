// src/harness/mod.rs

//! Literal-test plumbing: JSON positional case decoding, execution, and
//! tolerance comparison.
//!
//! Challenge cases arrive as positional JSON arrays: `[[0, 1], 0, 3]` for
//! the nine-qubit code (initial amplitudes of qubit 0, error key, faulted
//! qubit), `[12, 0]` for the clock circuit. Outputs are float vectors
//! compared with `allclose` semantics rather than exact equality, since
//! ~20 gate applications accumulate floating-point drift.

use crate::circuits::{clock, shor};
use crate::core::{QeccError, QubitId, tolerances};
use crate::simulation::Simulator;
use num_complex::Complex;
use serde::Deserialize;

/// Absolute slack used alongside the relative tolerance, matching the
/// reference comparison's default.
const DEFAULT_ATOL: f64 = 1e-8;

/// One nine-qubit code case: initial amplitudes of qubit 0, error key
/// (0 → X, 1 → Y, 2 → Z), and the faulted qubit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ShorCase(pub [f64; 2], pub u8, pub u64);

impl ShorCase {
    /// Decodes a case from its JSON text.
    pub fn parse(text: &str) -> Result<Self, QeccError> {
        serde_json::from_str(text).map_err(|err| QeccError::InvalidInput {
            message: format!("malformed nine-qubit code case: {}", err),
        })
    }

    /// Runs the case and returns the nine per-qubit Z expectations.
    pub fn run(&self) -> Result<Vec<f64>, QeccError> {
        let ShorCase([amp0, amp1], error_key, target) = *self;
        let kind = shor::ErrorKind::from_key(error_key)?;
        let fault = shor::Fault::new(kind, QubitId(target))?;
        let circuit = shor::circuit(
            [Complex::new(amp0, 0.0), Complex::new(amp1, 0.0)],
            Some(fault),
        );
        let result = Simulator::new().run(&circuit)?;
        Ok(result.z_expectations())
    }
}

/// One clock case: hour, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClockCase(pub u32, pub u32);

impl ClockCase {
    /// Decodes a case from its JSON text.
    pub fn parse(text: &str) -> Result<Self, QeccError> {
        serde_json::from_str(text).map_err(|err| QeccError::InvalidInput {
            message: format!("malformed clock case: {}", err),
        })
    }

    /// Runs the case and returns the four joint basis probabilities, hour
    /// qubit most significant.
    pub fn run(&self) -> Result<Vec<f64>, QeccError> {
        let circuit = clock::circuit(self.0, self.1)?;
        let result = Simulator::new().run(&circuit)?;
        Ok(result.probabilities())
    }
}

/// Component-wise float-vector comparison: every pair must satisfy
/// |a − b| ≤ atol + rtol·|b|. Vectors of different lengths never match.
pub fn allclose(actual: &[f64], expected: &[f64], rtol: f64, atol: f64) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, b)| (a - b).abs() <= atol + rtol * b.abs())
}

/// Expectation-vector comparison at the challenge tolerance
/// ([`tolerances::EXPECTATION_RTOL`]).
pub fn outputs_match(actual: &[f64], expected: &[f64]) -> bool {
    allclose(actual, expected, tolerances::EXPECTATION_RTOL, DEFAULT_ATOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shor_case_decodes_positionally() -> Result<(), QeccError> {
        let case = ShorCase::parse("[[0, 1], 0, 3]")?;
        assert_eq!(case, ShorCase([0.0, 1.0], 0, 3));
        Ok(())
    }

    #[test]
    fn clock_case_decodes_positionally() -> Result<(), QeccError> {
        let case = ClockCase::parse("[12, 0]")?;
        assert_eq!(case, ClockCase(12, 0));
        Ok(())
    }

    #[test]
    fn allclose_honors_relative_tolerance() {
        assert!(allclose(&[1.00005], &[1.0], 1e-4, 0.0));
        assert!(!allclose(&[1.001], &[1.0], 1e-4, 0.0));
        assert!(!allclose(&[1.0], &[1.0, 2.0], 1e-4, 0.0));
    }
}
