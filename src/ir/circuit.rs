use super::operations::Operation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Intermediate Representation of a Quantum Program.
///
/// A `Circuit` is an ordered, append-only sequence of operations. Two
/// circuits concatenate with `+`, which keeps the left operand's operations
/// first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Sequence of operations (gates and pragmas).
    pub operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the circuit.
    pub fn add_op(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends every operation from `ops`, in order.
    pub fn inst(&mut self, ops: impl IntoIterator<Item = Operation>) -> &mut Self {
        self.operations.extend(ops);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of gate applications, pragmas excluded.
    pub fn gate_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_gate()).count()
    }

    /// Sorted, distinct qubits touched by any gate.
    pub fn qubits(&self) -> Vec<usize> {
        let mut seen = BTreeSet::new();
        for op in &self.operations {
            if let Operation::Gate { qubits, .. } = op {
                seen.extend(qubits.iter().copied());
            }
        }
        seen.into_iter().collect()
    }
}

impl Add for Circuit {
    type Output = Circuit;

    fn add(mut self, rhs: Circuit) -> Circuit {
        self += rhs;
        self
    }
}

impl AddAssign for Circuit {
    fn add_assign(&mut self, rhs: Circuit) {
        self.operations.extend(rhs.operations);
    }
}

impl Extend<Operation> for Circuit {
    fn extend<T: IntoIterator<Item = Operation>>(&mut self, iter: T) {
        self.operations.extend(iter);
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

/// Renders the program as Quil, one instruction per line.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.operations {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}
