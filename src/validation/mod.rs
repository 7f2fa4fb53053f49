// src/validation/mod.rs

//! State checks: normalization, reduced density matrices, and product-state
//! detection.

use crate::core::{QeccError, StateVector, tolerances};
use num_complex::Complex;
use num_traits::Zero;

/// Checks that the state vector is normalized (sum of squared amplitudes
/// ≈ 1.0). Unitary evolution preserves this exactly; drift beyond tolerance
/// means something non-unitary happened.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to
///   [`tolerances::NORM`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QeccError::InvalidState)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QeccError> {
    let effective_tolerance = tolerance.unwrap_or(tolerances::NORM);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QeccError::InvalidState {
            message: format!(
                "state normalization failed: Σ|c_i|² = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Reduced density matrix of the qubits listed in `keep` (positions in the
/// basis ordering, most significant first), obtained by tracing out the
/// complement.
///
/// Row and column indices follow the order qubits appear in `keep`. The
/// matrix is Hermitian with unit trace for a normalized input state.
pub fn reduced_density_matrix(
    state: &StateVector,
    num_qubits: usize,
    keep: &[usize],
) -> Result<Vec<Vec<Complex<f64>>>, QeccError> {
    let dim = state.dim();
    if dim != 1usize << num_qubits {
        return Err(QeccError::InvalidState {
            message: format!(
                "state dimension {} does not match a {}-qubit register",
                dim, num_qubits
            ),
        });
    }
    if keep.is_empty() || keep.len() > num_qubits {
        return Err(QeccError::InvalidOperation {
            message: format!(
                "subsystem of {} qubits is not a proper part of a {}-qubit register",
                keep.len(),
                num_qubits
            ),
        });
    }
    for &position in keep {
        if position >= num_qubits {
            return Err(QeccError::InvalidOperation {
                message: format!("qubit position {} is outside 0..{}", position, num_qubits),
            });
        }
        if keep.iter().filter(|&&other| other == position).count() > 1 {
            return Err(QeccError::InvalidOperation {
                message: format!("qubit position {} listed more than once", position),
            });
        }
    }

    let amplitudes = state.amplitudes();
    let keep_dim = 1usize << keep.len();
    let mut rho = vec![vec![Complex::zero(); keep_dim]; keep_dim];

    // The value of the qubit at `position` within a joint basis index.
    let bit = |index: usize, position: usize| (index >> (num_qubits - 1 - position)) & 1;
    // A basis index packed down to just the kept qubits, in `keep` order.
    let packed = |index: usize| {
        keep.iter().fold(0usize, |acc, &position| (acc << 1) | bit(index, position))
    };

    let kept_mask = keep
        .iter()
        .fold(0usize, |acc, &position| acc | (1usize << (num_qubits - 1 - position)));
    let rest_mask = (dim - 1) & !kept_mask;

    // ρ[row][col] sums ψ_a ψ_b* over every pair of joint indices that agree
    // on all traced-out qubits.
    for a in 0..dim {
        let row = packed(a);
        for b in 0..dim {
            if a & rest_mask == b & rest_mask {
                rho[row][packed(b)] += amplitudes[a] * amplitudes[b].conj();
            }
        }
    }

    Ok(rho)
}

/// Purity Tr(ρ²) of a Hermitian density matrix. Since ρ = ρ†, this is just
/// Σ|ρ_ij|². Equals 1 exactly when ρ describes a pure state, and drops
/// toward 1/dim as the state mixes.
pub fn purity(rho: &[Vec<Complex<f64>>]) -> f64 {
    rho.iter()
        .flat_map(|row| row.iter())
        .map(|entry| entry.norm_sqr())
        .sum()
}

/// Whether a pure joint state factorizes across the cut between `subsystem`
/// and its complement.
///
/// A pure state is a product state across the cut exactly when the
/// subsystem's reduced state is itself pure, so this reduces to a purity
/// check against 1.
///
/// # Arguments
/// * `state` - The pure joint state.
/// * `num_qubits` - Number of qubits the state covers.
/// * `subsystem` - Qubit positions on one side of the cut.
/// * `tolerance` - Allowed purity deviation from 1; defaults to
///   [`tolerances::PURITY`].
pub fn is_product_state(
    state: &StateVector,
    num_qubits: usize,
    subsystem: &[usize],
    tolerance: Option<f64>,
) -> Result<bool, QeccError> {
    let effective_tolerance = tolerance.unwrap_or(tolerances::PURITY);
    let rho = reduced_density_matrix(state, num_qubits, subsystem)?;
    Ok((purity(&rho) - 1.0).abs() <= effective_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn state_of(amplitudes: Vec<Complex<f64>>) -> StateVector {
        StateVector::new(amplitudes)
    }

    fn bell_pair() -> StateVector {
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        state_of(vec![h, Complex::zero(), Complex::zero(), h])
    }

    #[test]
    fn normalization_accepts_a_unit_state() -> Result<(), QeccError> {
        check_normalization(&bell_pair(), None)
    }

    #[test]
    fn normalization_rejects_a_scaled_state() {
        let scaled = state_of(vec![Complex::new(0.5, 0.0), Complex::zero()]);
        assert!(check_normalization(&scaled, None).is_err());
    }

    #[test]
    fn entangled_pair_is_not_a_product_state() -> Result<(), QeccError> {
        assert!(!is_product_state(&bell_pair(), 2, &[0], None)?);
        Ok(())
    }

    #[test]
    fn basis_state_is_a_product_state() -> Result<(), QeccError> {
        let ground = state_of(vec![
            Complex::new(1.0, 0.0),
            Complex::zero(),
            Complex::zero(),
            Complex::zero(),
        ]);
        assert!(is_product_state(&ground, 2, &[0], None)?);
        Ok(())
    }

    #[test]
    fn bell_pair_reduces_to_the_maximally_mixed_qubit() -> Result<(), QeccError> {
        let rho = reduced_density_matrix(&bell_pair(), 2, &[0])?;
        assert!((rho[0][0].re - 0.5).abs() < 1e-12);
        assert!((rho[1][1].re - 0.5).abs() < 1e-12);
        assert!(rho[0][1].norm_sqr() < 1e-24);
        assert!((purity(&rho) - 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn subsystem_positions_are_validated() {
        let bell = bell_pair();
        assert!(reduced_density_matrix(&bell, 2, &[]).is_err());
        assert!(reduced_density_matrix(&bell, 2, &[2]).is_err());
        assert!(reduced_density_matrix(&bell, 2, &[0, 0]).is_err());
    }
}
