//! Error types for ansatz generation and its supporting I/O.

use thiserror::Error;

/// Errors raised while building ansatz circuits.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum AnsatzError {
    /// Rotation angles cannot be chosen from an empty angle vector.
    #[error("cannot place rotations on {qubits} qubit(s): angle vector is empty")]
    EmptyAngles {
        /// Number of qubits that needed a rotation.
        qubits: usize,
    },
}

/// Errors raised while parsing Quil program text.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// Line is not a recognizable instruction.
    #[error("line {line}: cannot parse '{text}'")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },

    /// Gate mnemonic outside the supported set.
    #[error("line {line}: unsupported gate '{name}'")]
    UnsupportedGate { line: usize, name: String },

    /// Gate called with the wrong number of parameters.
    #[error("line {line}: gate '{name}' takes {expected} parameter(s), got {got}")]
    ParameterCount {
        line: usize,
        name: String,
        expected: usize,
        got: usize,
    },

    /// Gate called with the wrong number of qubits.
    #[error("line {line}: gate '{name}' acts on {expected} qubit(s), got {got}")]
    QubitCount {
        line: usize,
        name: String,
        expected: usize,
        got: usize,
    },
}

/// Errors raised while loading an [`AnsatzConfig`](crate::config::AnsatzConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config must name at least one qubit")]
    NoQubits,

    #[error("qubit {0} appears more than once in config")]
    DuplicateQubit(usize),
}

/// Errors raised while reading or writing angle vectors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AngleError {
    #[error("failed to access angle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed angle CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A field that does not parse as a float.
    #[error("record {record}, field {field}: '{value}' is not an angle")]
    InvalidAngle {
        /// 0-based record index.
        record: usize,
        /// 0-based field index within the record.
        field: usize,
        value: String,
    },
}

/// Result alias for ansatz construction.
pub type AnsatzResult<T> = Result<T, AnsatzError>;
