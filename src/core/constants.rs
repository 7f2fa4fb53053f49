//! Numerical tolerances shared across the crate.

/// Tolerances for floating-point comparisons on simulated states.
pub mod tolerances {
    /// Allowed deviation of the state norm from 1 for internal checks.
    pub const NORM: f64 = 1e-9;
    /// Relative tolerance for comparing expectation-value outputs.
    pub const EXPECTATION_RTOL: f64 = 1e-4;
    /// Allowed deviation of a reduced state's purity from 1 when deciding
    /// whether a pure state factorizes.
    pub const PURITY: f64 = 1e-6;
}
