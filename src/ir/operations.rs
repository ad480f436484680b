use super::gates::GateType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiler directives understood by the downstream Quil compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pragma {
    /// Opens a region the compiler must not reorder or fuse.
    PreserveBlock,
    /// Closes the region opened by [`Pragma::PreserveBlock`].
    EndPreserveBlock,
    /// Any other pragma, stored as the text following `PRAGMA`.
    ///
    /// The text must be non-empty and must not be one of the reserved
    /// block directives, or it will not survive a render/parse round trip.
    /// [`Pragma::from_text`] enforces both.
    Custom(String),
}

impl Pragma {
    /// Builds a pragma from the text following `PRAGMA`.
    ///
    /// Reserved directives map to their dedicated variants; blank text
    /// yields `None`.
    pub fn from_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        match text.trim() {
            "" => None,
            "PRESERVE_BLOCK" => Some(Pragma::PreserveBlock),
            "END_PRESERVE_BLOCK" => Some(Pragma::EndPreserveBlock),
            trimmed => Some(Pragma::Custom(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Pragma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pragma::PreserveBlock => write!(f, "PRAGMA PRESERVE_BLOCK"),
            Pragma::EndPreserveBlock => write!(f, "PRAGMA END_PRESERVE_BLOCK"),
            Pragma::Custom(text) => write!(f, "PRAGMA {}", text),
        }
    }
}

/// Represents a single instruction in a program.
///
/// Operations are either gate applications or compiler directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// A quantum gate application.
    Gate {
        /// Type of the gate, including its angle for rotations.
        name: GateType,
        /// Indices of the qubits involved.
        qubits: Vec<usize>,
    },
    /// A compiler directive.
    Pragma(Pragma),
}

impl Operation {
    pub fn rx(theta: f64, qubit: usize) -> Self {
        Self::gate(GateType::RX(theta), vec![qubit])
    }

    pub fn ry(theta: f64, qubit: usize) -> Self {
        Self::gate(GateType::RY(theta), vec![qubit])
    }

    pub fn rz(theta: f64, qubit: usize) -> Self {
        Self::gate(GateType::RZ(theta), vec![qubit])
    }

    pub fn cz(control: usize, target: usize) -> Self {
        Self::gate(GateType::CZ, vec![control, target])
    }

    pub fn pragma(pragma: Pragma) -> Self {
        Operation::Pragma(pragma)
    }

    fn gate(name: GateType, qubits: Vec<usize>) -> Self {
        Operation::Gate { name, qubits }
    }

    /// Returns true for gate applications.
    pub fn is_gate(&self) -> bool {
        matches!(self, Operation::Gate { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Gate { name, qubits } => {
                write!(f, "{}", name.name())?;
                if let Some(theta) = name.angle() {
                    write!(f, "({})", theta)?;
                }
                for q in qubits {
                    write!(f, " {}", q)?;
                }
                Ok(())
            }
            Operation::Pragma(pragma) => write!(f, "{}", pragma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rotation() {
        assert_eq!(Operation::rx(0.5, 3).to_string(), "RX(0.5) 3");
        assert_eq!(Operation::rz(-1.0, 0).to_string(), "RZ(-1) 0");
    }

    #[test]
    fn test_display_cz() {
        assert_eq!(Operation::cz(1, 2).to_string(), "CZ 1 2");
    }

    #[test]
    fn test_display_pragmas() {
        assert_eq!(
            Operation::pragma(Pragma::PreserveBlock).to_string(),
            "PRAGMA PRESERVE_BLOCK"
        );
        assert_eq!(
            Operation::pragma(Pragma::EndPreserveBlock).to_string(),
            "PRAGMA END_PRESERVE_BLOCK"
        );
        assert_eq!(
            Operation::pragma(Pragma::Custom("INITIAL_REWIRING \"NAIVE\"".to_string()))
                .to_string(),
            "PRAGMA INITIAL_REWIRING \"NAIVE\""
        );
    }

    #[test]
    fn test_from_text_normalises() {
        assert_eq!(Pragma::from_text("PRESERVE_BLOCK"), Some(Pragma::PreserveBlock));
        assert_eq!(
            Pragma::from_text(" END_PRESERVE_BLOCK "),
            Some(Pragma::EndPreserveBlock)
        );
        assert_eq!(
            Pragma::from_text("COMMUTING_BLOCKS"),
            Some(Pragma::Custom("COMMUTING_BLOCKS".to_string()))
        );
        assert_eq!(Pragma::from_text("   "), None);
    }

    #[test]
    fn test_is_gate() {
        assert!(Operation::cz(0, 1).is_gate());
        assert!(!Operation::pragma(Pragma::PreserveBlock).is_gate());
    }
}
