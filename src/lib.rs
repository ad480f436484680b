//! Ansatz circuit generation for Variational Quantum Eigensolver workflows.
//!
//! [`ansatz::get_ansatz_circuit_generator`] turns a qubit layout and a depth
//! into a builder that maps an angle vector onto a Quil program: a rotation
//! layer followed by `depth` CZ-entangling layers, each wrapped in a
//! `PRAGMA PRESERVE_BLOCK` region so the compiler leaves the gates alone.
//!
//! ```
//! use vqe_ansatz::get_ansatz_circuit_generator;
//!
//! let build = get_ansatz_circuit_generator(vec![0, 1, 2], 2);
//! let program = build(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
//! assert!(program.to_string().starts_with("PRAGMA PRESERVE_BLOCK\n"));
//! ```

pub mod angles;
pub mod ansatz;
pub mod config;
pub mod error;
pub mod ir;
pub mod parser;

pub use ansatz::{
    get_ansatz_circuit_generator, get_ansatz_circuit_generator_with_seed, AnsatzCircuitGenerator,
};
pub use config::AnsatzConfig;
pub use error::{AngleError, AnsatzError, ConfigError, ParseError};
pub use ir::{Circuit, GateType, Operation, Pragma};
pub use parser::parse_quil;
