use vqe_ansatz::ir::{Circuit, Operation, Pragma};
use vqe_ansatz::parser::parse_quil;
use vqe_ansatz::ParseError;

#[test]
fn test_handwritten_layer() {
    let quil = r#"
        # two-qubit entangling layer
        PRAGMA PRESERVE_BLOCK
        CZ 0 1
        RZ(0.75) 0
        RX(-1.5) 1
        PRAGMA END_PRESERVE_BLOCK
    "#;

    let circuit = parse_quil(quil).expect("Failed to parse layer");
    assert_eq!(circuit.len(), 5);
    assert_eq!(circuit.gate_count(), 3);
    assert_eq!(circuit.operations[2], Operation::rz(0.75, 0));
    assert_eq!(circuit.operations[3], Operation::rx(-1.5, 1));
}

#[test]
fn test_whitespace_tolerance() {
    let quil = "  PRAGMA PRESERVE_BLOCK  \n\n   CZ   3   4  \nRY( 0.5 ) 3\n";
    let result = parse_quil(quil);
    // Spaces inside the parameter list are not Quil.
    assert!(matches!(result, Err(ParseError::Syntax { line: 4, .. })));

    let circuit = parse_quil("  PRAGMA PRESERVE_BLOCK  \n\n   CZ   3   4  \n").unwrap();
    assert_eq!(
        circuit.operations,
        vec![Operation::pragma(Pragma::PreserveBlock), Operation::cz(3, 4)]
    );
}

#[test]
fn test_empty_program() {
    let circuit = parse_quil("\n# nothing here\n").unwrap();
    assert!(circuit.is_empty());
}

#[test]
fn test_concatenate_parsed_programs() {
    let head: Circuit = "RX(0.1) 0".parse().unwrap();
    let tail: Circuit = "CZ 0 1\nRY(0.2) 1".parse().unwrap();
    let joined = head + tail;
    assert_eq!(joined.to_string(), "RX(0.1) 0\nCZ 0 1\nRY(0.2) 1\n");
}

#[test]
fn test_unsupported_gate_line() {
    let quil = "PRAGMA PRESERVE_BLOCK\nCNOT 0 1\n";
    match parse_quil(quil) {
        Err(ParseError::UnsupportedGate { line, name }) => {
            assert_eq!(line, 2);
            assert_eq!(name, "CNOT");
        }
        other => panic!("Expected UnsupportedGate, got {:?}", other),
    }
}

#[test]
fn test_cz_with_parameter() {
    assert!(matches!(
        parse_quil("CZ(0.5) 0 1"),
        Err(ParseError::ParameterCount {
            expected: 0,
            got: 1,
            ..
        })
    ));
}
