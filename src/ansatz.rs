//! Hardware-efficient ansatz generation for VQE.
//!
//! Every layer is emitted inside a `PRAGMA PRESERVE_BLOCK` /
//! `PRAGMA END_PRESERVE_BLOCK` pair so the downstream compiler keeps the
//! gates exactly as generated.

use crate::error::{AnsatzError, AnsatzResult};
use crate::ir::{Circuit, Operation, Pragma};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Seed used for rotation selection unless one is given explicitly.
pub const DEFAULT_SEED: u64 = 99999;

/// Depth the factory stores on the generator it builds. The factory's own
/// `depth` argument only drives its layer loop.
pub const FACTORY_GENERATOR_DEPTH: usize = 2;

/// Builds preserve-block layers of rotations and CZ entanglers over a fixed
/// qubit layout.
///
/// The generator holds no mutable state: every call draws from a fresh
/// random stream seeded with [`seed`](Self::seed), so identical inputs
/// always produce identical circuits.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsatzCircuitGenerator {
    qubits: Vec<usize>,
    depth: usize,
    seed: u64,
}

impl AnsatzCircuitGenerator {
    /// Creates a generator over `qubits`, seeded with [`DEFAULT_SEED`].
    ///
    /// # Arguments
    ///
    /// * `qubits` - Qubits to place gates on, in entangling order.
    /// * `depth` - Stored as-is; layer repetition is driven by the caller.
    pub fn new(qubits: Vec<usize>, depth: usize) -> Self {
        Self {
            qubits,
            depth,
            seed: DEFAULT_SEED,
        }
    }

    /// Replaces the seed of the per-call random stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Qubits in the order rotations are placed and neighbours entangled.
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Depth given at construction. Generation never reads it; callers such
    /// as [`get_ansatz_circuit_generator`] decide how many layers to emit.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Seed of the random stream each layer call starts from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rotation-only layer: one random rotation per qubit.
    pub fn generate_first_layer(&self, thetas: &[f64]) -> AnsatzResult<Circuit> {
        self.generate_first_layer_with(&mut self.rng(), thetas)
    }

    /// Entangling layer followed by one random rotation per qubit.
    pub fn generate(&self, thetas: &[f64]) -> AnsatzResult<Circuit> {
        self.generate_with(&mut self.rng(), thetas)
    }

    /// Like [`generate_first_layer`](Self::generate_first_layer), drawing
    /// from a caller-owned stream instead of reseeding.
    pub fn generate_first_layer_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        thetas: &[f64],
    ) -> AnsatzResult<Circuit> {
        let rotations = self.apply_random_gates_with(rng, thetas)?;
        debug!(qubits = self.qubits.len(), angles = thetas.len(), "first layer");
        Ok(preserve_block(rotations))
    }

    /// Like [`generate`](Self::generate), drawing from a caller-owned stream
    /// instead of reseeding.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        thetas: &[f64],
    ) -> AnsatzResult<Circuit> {
        let mut body = self.entangle();
        body.extend(self.apply_random_gates_with(rng, thetas)?);
        debug!(qubits = self.qubits.len(), angles = thetas.len(), "entangling layer");
        Ok(preserve_block(body))
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    fn apply_random_gates_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        thetas: &[f64],
    ) -> AnsatzResult<Vec<Operation>> {
        let len = thetas.len();
        if len == 0 && !self.qubits.is_empty() {
            return Err(AnsatzError::EmptyAngles {
                qubits: self.qubits.len(),
            });
        }

        let mut gates = Vec::with_capacity(self.qubits.len());
        for (i, &qubit) in self.qubits.iter().enumerate() {
            // Upper bound is inclusive; the modulo folds `len` back to 0.
            let j = rng.gen_range(0..=len);
            let theta = thetas[(i + j) % len];
            let gate = match rng.gen_range(0..3) {
                0 => Operation::rz(theta, qubit),
                1 => Operation::rx(theta, qubit),
                _ => Operation::ry(theta, qubit),
            };
            trace!(%gate, "rotation");
            gates.push(gate);
        }
        Ok(gates)
    }

    fn entangle(&self) -> Vec<Operation> {
        self.qubits
            .windows(2)
            .map(|pair| Operation::cz(pair[0], pair[1]))
            .collect()
    }
}

fn preserve_block(body: Vec<Operation>) -> Circuit {
    let mut circuit = Circuit::new();
    circuit
        .inst([Operation::pragma(Pragma::PreserveBlock)])
        .inst(body)
        .inst([Operation::pragma(Pragma::EndPreserveBlock)]);
    circuit
}

/// Returns a closure that assembles a full ansatz from one angle vector.
///
/// The closure emits a rotation-only layer from the first `qubits.len()`
/// angles, then `depth` entangling layers that all draw from the remaining
/// angles. Every entangling layer sees the same angle slice, so the repeated
/// layers are identical.
///
/// # Examples
///
/// ```
/// use vqe_ansatz::ansatz::get_ansatz_circuit_generator;
///
/// let build = get_ansatz_circuit_generator(vec![0, 1], 1);
/// let circuit = build(&[0.1, 0.2, 0.3, 0.4]).unwrap();
/// // 2 rotations, then 1 CZ + 2 rotations
/// assert_eq!(circuit.gate_count(), 5);
/// ```
pub fn get_ansatz_circuit_generator(
    qubits: Vec<usize>,
    depth: usize,
) -> impl Fn(&[f64]) -> AnsatzResult<Circuit> + Send + Sync {
    get_ansatz_circuit_generator_with_seed(qubits, depth, DEFAULT_SEED)
}

/// [`get_ansatz_circuit_generator`] with an explicit rotation seed.
pub fn get_ansatz_circuit_generator_with_seed(
    qubits: Vec<usize>,
    depth: usize,
    seed: u64,
) -> impl Fn(&[f64]) -> AnsatzResult<Circuit> + Send + Sync {
    let num_qubits = qubits.len();
    let generator = AnsatzCircuitGenerator::new(qubits, FACTORY_GENERATOR_DEPTH).with_seed(seed);

    move |thetas: &[f64]| {
        let split = num_qubits.min(thetas.len());
        let (head, tail) = thetas.split_at(split);

        let mut ansatz = Circuit::new();
        ansatz += generator.generate_first_layer(head)?;
        for layer in 0..depth {
            trace!(layer, "appending entangling layer");
            ansatz += generator.generate(tail)?;
        }
        debug!(
            qubits = num_qubits,
            depth,
            operations = ansatz.len(),
            "assembled ansatz"
        );
        Ok(ansatz)
    }
}
