// demos/clock_readout.rs

//! Encodes a few dial times on the two clock qubits and prints the joint
//! basis probabilities (hour qubit most significant).

use qecc::circuits::clock;
use qecc::{QeccError, Simulator};

fn main() -> Result<(), QeccError> {
    let simulator = Simulator::new();

    for (hour, minute) in [(12, 0), (1, 30), (9, 0)] {
        let circuit = clock::circuit(hour, minute)?;
        let probabilities = simulator.run(&circuit)?.probabilities();
        println!(
            "{:2}:{:02} -> [{}]",
            hour,
            minute,
            probabilities
                .iter()
                .map(|p| format!("{:.4}", p))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
