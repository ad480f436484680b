//! Ansatz shape configuration.
//!
//! A config document fixes the qubit layout, the number of entangling
//! layers and the rotation seed, e.g.
//!
//! ```json
//! { "qubits": [0, 1, 2, 3], "depth": 2, "seed": 99999 }
//! ```
//!
//! `seed` is optional and defaults to [`DEFAULT_SEED`].

use crate::ansatz::{
    get_ansatz_circuit_generator_with_seed, AnsatzCircuitGenerator, DEFAULT_SEED,
};
use crate::error::{AnsatzResult, ConfigError};
use crate::ir::Circuit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnsatzConfig {
    /// Qubits in entangling order.
    pub qubits: Vec<usize>,
    /// Number of entangling layers after the first rotation layer.
    pub depth: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl AnsatzConfig {
    pub fn new(qubits: Vec<usize>, depth: usize) -> Self {
        Self {
            qubits,
            depth,
            seed: DEFAULT_SEED,
        }
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(
            path = %path.display(),
            qubits = config.qubits.len(),
            depth = config.depth,
            "loaded ansatz config"
        );
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects empty layouts and repeated qubits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qubits.is_empty() {
            return Err(ConfigError::NoQubits);
        }
        let mut seen = HashSet::with_capacity(self.qubits.len());
        for &q in &self.qubits {
            if !seen.insert(q) {
                return Err(ConfigError::DuplicateQubit(q));
            }
        }
        Ok(())
    }

    /// Single-layer generator over this layout, carrying `depth` and `seed`.
    pub fn generator(&self) -> AnsatzCircuitGenerator {
        AnsatzCircuitGenerator::new(self.qubits.clone(), self.depth).with_seed(self.seed)
    }

    /// Full-circuit builder, equivalent to the factory called with this
    /// config's fields.
    pub fn circuit_generator(&self) -> impl Fn(&[f64]) -> AnsatzResult<Circuit> + Send + Sync {
        get_ansatz_circuit_generator_with_seed(self.qubits.clone(), self.depth, self.seed)
    }
}
