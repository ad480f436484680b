use serde::{Deserialize, Serialize};

/// Quantum Gate Types
///
/// This enum represents the gate set an ansatz layer is built from:
/// parameterized single-qubit rotations (RX, RY, RZ) and the two-qubit
/// controlled-phase gate (CZ) used for entanglement.
///
/// # Examples
///
/// ```
/// use vqe_ansatz::ir::GateType;
/// let cz = GateType::CZ;
/// let rx = GateType::RX(1.57);
/// assert_eq!(rx.name(), "RX");
/// assert_eq!(cz.num_qubits(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateType {
    /// Rotation around X-axis with angle theta
    RX(f64),
    /// Rotation around Y-axis with angle theta
    RY(f64),
    /// Rotation around Z-axis with angle theta
    RZ(f64),
    /// Controlled-Z (controlled-phase) gate
    CZ,
}

impl GateType {
    /// Quil mnemonic of the gate.
    pub fn name(&self) -> &'static str {
        match self {
            GateType::RX(_) => "RX",
            GateType::RY(_) => "RY",
            GateType::RZ(_) => "RZ",
            GateType::CZ => "CZ",
        }
    }

    /// Rotation angle, if the gate is parameterized.
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateType::RX(theta) | GateType::RY(theta) | GateType::RZ(theta) => Some(*theta),
            GateType::CZ => None,
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            GateType::CZ => 2,
            _ => 1,
        }
    }
}
