pub mod ast;
pub mod rules;

use self::ast::ParsedStatement;
use self::rules::{comment, gate_call, pragma};
use crate::error::ParseError;
use crate::ir::{Circuit, GateType, Operation, Pragma};
use nom::{
    branch::alt,
    character::complete::space0,
    combinator::{all_consuming, opt},
    sequence::terminated,
};
use std::str::FromStr;
use tracing::trace;

// --- Resolution & Mapping ---

fn map_gate(
    line: usize,
    name: String,
    params: Vec<f64>,
    qubits: Vec<usize>,
) -> Result<Operation, ParseError> {
    let theta = params.first().copied().unwrap_or(0.0);
    let (gate, expected_params) = match name.as_str() {
        "RX" => (GateType::RX(theta), 1),
        "RY" => (GateType::RY(theta), 1),
        "RZ" => (GateType::RZ(theta), 1),
        "CZ" => (GateType::CZ, 0),
        _ => return Err(ParseError::UnsupportedGate { line, name }),
    };

    if params.len() != expected_params {
        return Err(ParseError::ParameterCount {
            line,
            name,
            expected: expected_params,
            got: params.len(),
        });
    }
    if qubits.len() != gate.num_qubits() {
        return Err(ParseError::QubitCount {
            line,
            expected: gate.num_qubits(),
            got: qubits.len(),
            name,
        });
    }

    Ok(Operation::Gate {
        name: gate,
        qubits,
    })
}

fn parse_line(line_no: usize, line: &str) -> Result<ParsedStatement, ParseError> {
    let line = line.trim();
    if line.is_empty() || comment(line).is_ok() {
        return Ok(ParsedStatement::Ignore);
    }

    all_consuming(alt((
        pragma,
        terminated(gate_call, terminated(space0, opt(comment))),
    )))(line)
    .map(|(_, stmt)| stmt)
    .map_err(|_| ParseError::Syntax {
        line: line_no,
        text: line.to_string(),
    })
}

/// Parses Quil program text into a [`Circuit`].
///
/// Only the instructions an ansatz is built from are accepted: `PRAGMA`
/// directives, `RX`/`RY`/`RZ` rotations and `CZ`. Blank lines and `#`
/// comments are skipped.
pub fn parse_quil(input: &str) -> Result<Circuit, ParseError> {
    let mut circuit = Circuit::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        match parse_line(line, raw)? {
            ParsedStatement::Ignore => {}
            ParsedStatement::Pragma(text) => match Pragma::from_text(text) {
                Some(pragma) => circuit.add_op(Operation::Pragma(pragma)),
                None => {
                    return Err(ParseError::Syntax {
                        line,
                        text: raw.trim().to_string(),
                    })
                }
            },
            ParsedStatement::Gate(name, params, qubits) => {
                circuit.add_op(map_gate(line, name, params, qubits)?);
            }
        }
    }

    trace!(operations = circuit.len(), "parsed Quil program");
    Ok(circuit)
}

impl FromStr for Circuit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quil(s)
    }
}
