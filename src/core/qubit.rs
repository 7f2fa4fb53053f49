// src/core/qubit.rs

use std::fmt;

/// Identifies one two-level subsystem within a simulated register.
///
/// IDs are plain integers; the simulation engine sorts them and assigns each
/// a position in the joint basis, so `QubitId(0)` always occupies the most
/// significant bit of a basis-state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit({})", self.0)
    }
}
