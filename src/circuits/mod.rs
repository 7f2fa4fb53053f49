// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qecc::operations::Operation`), plus the library circuits
//! this crate exists to run.
//!
//! [`Circuit`] is an ordered operation list with the set of qubits it
//! touches; [`CircuitBuilder`] constructs one by method chaining. The
//! concrete circuits live in [`shor`] (the nine-qubit code) and [`clock`]
//! (the two-qubit time encoding).

// Import necessary types from other modules
use crate::core::QubitId;
use crate::operations::Operation;
use std::collections::{HashMap, HashSet};
use std::fmt;

pub mod clock;
pub mod shor;

/// Represents an ordered sequence of operations applied to a set of qubits.
///
/// The order is critical: gates do not commute in general, and the code
/// circuits depend on their exact sequencing.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// The unique set of qubits involved across all operations.
    qubits: HashSet<QubitId>,

    /// The ordered sequence of operations defining the circuit's logic.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    ///
    /// The qubits involved in `op` are registered automatically.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit_id in op.involved_qubits() {
            self.qubits.insert(qubit_id);
        }
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns a reference to the set of unique qubit IDs involved.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Returns the ordered sequence of operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "qecc::Circuit[0 operations on 0 qubits]");
        }

        // --- Setup ---
        let ops = &self.operations;
        let num_ops = ops.len();

        // Get sorted list of unique qubits and create row map
        let mut sorted_qubits: Vec<QubitId> = self.qubits.iter().cloned().collect();
        sorted_qubits.sort();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> = sorted_qubits
            .iter()
            .enumerate()
            .map(|(i, qid)| (*qid, i))
            .collect();

        // Determine label width
        let max_label_width = sorted_qubits
            .iter()
            .map(|qid| format!("{}", qid).len())
            .max()
            .unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2); // Label + ": "

        // Grid dimensions and padding
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        // v_connect[row][time] stores the vertical connector char below this row at this time
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        // Helper to format a gate symbol
        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        // Draws vertical connectors between the rows a multi-qubit gate spans.
        fn connect_rows(v_connect: &mut [Vec<char>], t: usize, r_min: usize, r_max: usize) {
            for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                row_vec[t] = V_WIRE;
            }
        }

        // --- Populate Grids ---
        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::Prepare { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("Ψ");
                    }
                }
                Operation::PauliX { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("X");
                    }
                }
                Operation::PauliY { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("Y");
                    }
                }
                Operation::PauliZ { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("Z");
                    }
                }
                Operation::Hadamard { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("H");
                    }
                }
                Operation::RotateY { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("RY");
                    }
                }
                Operation::ControlledNot { control, target } => {
                    if let (Some(r_ctrl), Some(r_tgt)) =
                        (qubit_to_row.get(control), qubit_to_row.get(target))
                    {
                        op_grid[*r_ctrl][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate("X");
                        connect_rows(&mut v_connect, t, (*r_ctrl).min(*r_tgt), (*r_ctrl).max(*r_tgt));
                    }
                }
                Operation::Toffoli { control_a, control_b, target } => {
                    if let (Some(r_a), Some(r_b), Some(r_tgt)) = (
                        qubit_to_row.get(control_a),
                        qubit_to_row.get(control_b),
                        qubit_to_row.get(target),
                    ) {
                        op_grid[*r_a][t] = format_gate("@");
                        op_grid[*r_b][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate("X");
                        let r_min = (*r_a).min(*r_b).min(*r_tgt);
                        let r_max = (*r_a).max(*r_b).max(*r_tgt);
                        connect_rows(&mut v_connect, t, r_min, r_max);
                    }
                }
            }
        }

        // --- Format Output String ---
        writeln!(
            f,
            "qecc::Circuit[{} operations on {} qubits]",
            num_ops, num_qubits
        )?;
        for r in 0..num_qubits {
            // Print qubit label row
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            // Print vertical connector row (if not the last qubit)
            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn builder_registers_involved_qubits() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Hadamard { target: qid(0) })
            .add_op(Operation::ControlledNot { control: qid(0), target: qid(1) })
            .build();

        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.qubits().len(), 2);
        assert!(circuit.qubits().contains(&qid(0)));
        assert!(circuit.qubits().contains(&qid(1)));
    }

    #[test]
    fn toffoli_registers_all_three_qubits() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Toffoli {
                control_a: qid(1),
                control_b: qid(2),
                target: qid(0),
            })
            .build();

        assert_eq!(circuit.qubits().len(), 3);
    }

    #[test]
    fn display_renders_one_row_per_qubit() {
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Hadamard { target: qid(0) })
            .add_op(Operation::ControlledNot { control: qid(0), target: qid(1) })
            .build();

        let rendered = format!("{}", circuit);
        assert!(rendered.contains("Qubit(0):"));
        assert!(rendered.contains("Qubit(1):"));
        assert!(rendered.contains("H"));
        assert!(rendered.contains("@"));
    }
}
