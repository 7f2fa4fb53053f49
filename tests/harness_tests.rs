// tests/harness_tests.rs

use qecc::harness::{ClockCase, ShorCase, allclose, outputs_match};
use qecc::validation::is_product_state;
use qecc::{CircuitBuilder, Operation, QeccError, QubitId, Simulator};

fn qid(id: u64) -> QubitId {
    QubitId(id)
}

#[test]
fn shor_reference_case_round_trips() -> Result<(), QeccError> {
    // The literal challenge case: logical |1⟩, bit flip on qubit 3.
    let case = ShorCase::parse("[[0, 1], 0, 3]")?;
    let output = case.run()?;
    let expected = [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
    assert!(
        outputs_match(&output, &expected),
        "got {:?}, want {:?}",
        output,
        expected
    );
    Ok(())
}

#[test]
fn shor_trivial_case_reads_all_ones() -> Result<(), QeccError> {
    let case = ShorCase::parse("[[1, 0], 2, 8]")?;
    let output = case.run()?;
    assert!(outputs_match(&output, &[1.0; 9]));
    Ok(())
}

#[test]
fn malformed_case_text_is_rejected() {
    assert!(ShorCase::parse("[[0, 1], 0]").is_err());
    assert!(ShorCase::parse("not json").is_err());
    assert!(ClockCase::parse("[12]").is_err());
}

#[test]
fn out_of_range_case_fields_are_rejected() -> Result<(), QeccError> {
    // The text decodes fine; the ranges are enforced at run time.
    assert!(ShorCase::parse("[[0, 1], 3, 3]")?.run().is_err());
    assert!(ShorCase::parse("[[0, 1], 0, 9]")?.run().is_err());
    assert!(ClockCase::parse("[13, 0]")?.run().is_err());
    assert!(ClockCase::parse("[1, 60]")?.run().is_err());
    Ok(())
}

#[test]
fn non_unit_initial_state_is_rejected() -> Result<(), QeccError> {
    assert!(ShorCase::parse("[[1, 1], 0, 0]")?.run().is_err());
    Ok(())
}

#[test]
fn clock_at_noon_reads_the_ground_basis_state() -> Result<(), QeccError> {
    let probabilities = ClockCase::parse("[12, 0]")?.run()?;
    // The reference harness compares clock outputs at atol 0.1.
    assert!(allclose(&probabilities, &[1.0, 0.0, 0.0, 0.0], 1e-5, 0.1));
    Ok(())
}

#[test]
fn clock_at_half_past_one() -> Result<(), QeccError> {
    let probabilities = ClockCase::parse("[1, 30]")?.run()?;
    let expected = [0.0, 0.853_553_39, 0.0, 0.146_446_61];
    assert!(
        allclose(&probabilities, &expected, 1e-5, 0.1),
        "got {:?}",
        probabilities
    );
    Ok(())
}

#[test]
fn entangled_pair_is_detected_as_non_product() -> Result<(), QeccError> {
    // (|00⟩ + |11⟩)/√2 across the {0} | {1} cut.
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Hadamard { target: qid(0) })
        .add_op(Operation::ControlledNot { control: qid(0), target: qid(1) })
        .build();
    let result = Simulator::new().run(&circuit)?;
    assert!(!is_product_state(result.state(), 2, &[0], None)?);
    Ok(())
}

#[test]
fn separable_pair_is_detected_as_product() -> Result<(), QeccError> {
    // |00⟩ prepared explicitly on both qubits.
    let one = num_complex::Complex::new(1.0, 0.0);
    let zero = num_complex::Complex::new(0.0, 0.0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Prepare { target: qid(0), alpha: one, beta: zero })
        .add_op(Operation::Prepare { target: qid(1), alpha: one, beta: zero })
        .build();
    let result = Simulator::new().run(&circuit)?;
    assert!(is_product_state(result.state(), 2, &[0], None)?);
    Ok(())
}
