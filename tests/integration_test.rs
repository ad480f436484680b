#[cfg(test)]
mod tests {
    use vqe_ansatz::ir::{GateType, Operation, Pragma};
    use vqe_ansatz::{get_ansatz_circuit_generator, parse_quil, AnsatzConfig, AnsatzError};

    #[test]
    fn test_two_qubit_depth_one() {
        let build = get_ansatz_circuit_generator(vec![0, 1], 1);
        let circuit = build(&[0.1, 0.2, 0.3, 0.4]).expect("Failed to build ansatz");

        // First block: PRAGMA, 2 rotations, END
        assert_eq!(circuit.operations[0], Operation::pragma(Pragma::PreserveBlock));
        for op in &circuit.operations[1..3] {
            match op {
                Operation::Gate { name, qubits } => {
                    assert!(name.angle().is_some());
                    assert_eq!(qubits.len(), 1);
                }
                _ => panic!("Expected rotation"),
            }
        }
        assert_eq!(circuit.operations[3], Operation::pragma(Pragma::EndPreserveBlock));

        // Second block: PRAGMA, CZ, 2 rotations, END
        assert_eq!(circuit.operations[4], Operation::pragma(Pragma::PreserveBlock));
        assert_eq!(circuit.operations[5], Operation::cz(0, 1));
        assert_eq!(circuit.operations[8], Operation::pragma(Pragma::EndPreserveBlock));
        assert_eq!(circuit.len(), 9);
    }

    #[test]
    fn test_quil_output_round_trips() {
        let build = get_ansatz_circuit_generator(vec![0, 1, 2, 3], 2);
        let thetas: Vec<f64> = (0..8).map(|i| 0.125 * i as f64 - 0.5).collect();
        let circuit = build(&thetas).unwrap();

        let quil = circuit.to_string();
        assert_eq!(quil.matches("PRAGMA PRESERVE_BLOCK\n").count(), 3);
        assert_eq!(quil.matches("PRAGMA END_PRESERVE_BLOCK\n").count(), 3);

        let parsed = parse_quil(&quil).expect("Failed to parse generated program");
        assert_eq!(parsed, circuit);
    }

    #[test]
    fn test_rotations_only_use_supplied_angles() {
        let thetas = [0.11, 0.22, 0.33, 0.44, 0.55];
        let build = get_ansatz_circuit_generator(vec![7, 8, 9], 3);
        let circuit = build(&thetas).unwrap();
        for op in &circuit.operations {
            if let Operation::Gate { name, .. } = op {
                if let Some(theta) = name.angle() {
                    assert!(thetas.contains(&theta));
                }
            }
        }
        assert_eq!(circuit.qubits(), vec![7, 8, 9]);
    }

    #[test]
    fn test_cz_count_scales_with_depth() {
        let build = get_ansatz_circuit_generator(vec![0, 1, 2, 3], 3);
        let circuit = build(&[0.1; 10]).unwrap();
        let cz = circuit
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::Gate { name: GateType::CZ, .. }))
            .count();
        assert_eq!(cz, 3 * 3);
    }

    #[test]
    fn test_empty_angles_fail() {
        let build = get_ansatz_circuit_generator(vec![0, 1], 1);
        assert_eq!(build(&[]), Err(AnsatzError::EmptyAngles { qubits: 2 }));
    }

    #[test]
    fn test_config_driven_build() {
        let config =
            AnsatzConfig::from_json_str(r#"{ "qubits": [0, 1, 2], "depth": 2, "seed": 3 }"#)
                .expect("Failed to load config");
        let build = config.circuit_generator();
        let circuit = build(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        // 3 + 2 * (2 + 3) gates
        assert_eq!(circuit.gate_count(), 13);
    }
}
