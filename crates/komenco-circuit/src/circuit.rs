//! High-level circuit builder API.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{CircuitError, CircuitResult};
use crate::gate::{GateSpec, MEASURE, RANDOM_GATE_POOL};
use crate::operation::Operation;

/// A quantum circuit: a fixed qubit count plus an ordered, append-only
/// sequence of gate operations.
///
/// Every append validates gate arity and qubit bounds against the catalog
/// before recording anything, so a constructed circuit is always
/// well-formed. Insertion order is execution order and is preserved
/// through serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Number of qubits, fixed at construction.
    num_qubits: u32,
    /// Recorded operations, in execution order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> CircuitResult<Self> {
        if num_qubits == 0 {
            return Err(CircuitError::InvalidQubitCount);
        }
        Ok(Self {
            num_qubits,
            operations: vec![],
        })
    }

    /// Number of qubits in the circuit.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Immutable view of the recorded operations, in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Append a gate by wire name, validated against the catalog.
    ///
    /// All named gate methods route through here. Fails with
    /// [`CircuitError::UnknownGate`] for names outside the catalog,
    /// [`CircuitError::QubitCountMismatch`] /
    /// [`CircuitError::ParamCountMismatch`] on arity violations, and
    /// [`CircuitError::QubitOutOfRange`] for indices outside
    /// `[0, num_qubits)`.
    pub fn push_gate(
        &mut self,
        name: &str,
        params: &[f64],
        qubits: &[u32],
    ) -> CircuitResult<&mut Self> {
        let spec =
            GateSpec::lookup(name).ok_or_else(|| CircuitError::UnknownGate(name.to_string()))?;

        let expected = spec.required_qubits();
        if qubits.len() as u32 != expected {
            return Err(CircuitError::QubitCountMismatch {
                gate: spec.name.to_string(),
                expected,
                got: qubits.len() as u32,
            });
        }
        if params.len() != spec.params {
            return Err(CircuitError::ParamCountMismatch {
                gate: spec.name.to_string(),
                expected: spec.params,
                got: params.len(),
            });
        }
        self.check_bounds(qubits)?;

        self.operations
            .push(Operation::new(spec.name, params.to_vec(), qubits.to_vec()));
        Ok(self)
    }

    fn check_bounds(&self, qubits: &[u32]) -> CircuitResult<()> {
        for &qubit in qubits {
            if qubit >= self.num_qubits {
                return Err(CircuitError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply the identity gate.
    pub fn id(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("id", &[], &[qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("x", &[], &[qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("y", &[], &[qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("z", &[], &[qubit])
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("h", &[], &[qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("s", &[], &[qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sdg", &[], &[qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("t", &[], &[qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("tdg", &[], &[qubit])
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sx", &[], &[qubit])
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sxdg", &[], &[qubit])
    }

    /// Apply sqrt(X) in its `sqrt_x` wire spelling.
    pub fn sqrt_x(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sqrt_x", &[], &[qubit])
    }

    /// Apply sqrt(Y).
    pub fn sqrt_y(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sqrt_y", &[], &[qubit])
    }

    /// Apply sqrt(Z).
    pub fn sqrt_z(&mut self, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("sqrt_z", &[], &[qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("rx", &[theta], &[qubit])
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ry", &[theta], &[qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("rz", &[theta], &[qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("p", &[theta], &[qubit])
    }

    /// Apply U1 phase gate.
    pub fn u1(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("u1", &[theta], &[qubit])
    }

    /// Apply GPI gate (IonQ native).
    pub fn gpi(&mut self, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("gpi", &[phi], &[qubit])
    }

    /// Apply GPI2 gate (IonQ native).
    pub fn gpi2(&mut self, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("gpi2", &[phi], &[qubit])
    }

    /// Apply parameterized X gate.
    pub fn xp(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("xp", &[theta], &[qubit])
    }

    /// Apply parameterized Y gate.
    pub fn yp(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("yp", &[theta], &[qubit])
    }

    /// Apply parameterized Z gate.
    pub fn zp(&mut self, theta: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("zp", &[theta], &[qubit])
    }

    /// Apply R rotation gate.
    pub fn r(&mut self, theta: f64, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("r", &[theta, phi], &[qubit])
    }

    /// Apply U2 gate.
    pub fn u2(&mut self, phi: f64, lam: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("u2", &[phi, lam], &[qubit])
    }

    /// Apply phased parameterized X gate.
    pub fn phased_xp(&mut self, theta: f64, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("phased_xp", &[theta, phi], &[qubit])
    }

    /// Apply phased parameterized Y gate.
    pub fn phased_yp(&mut self, theta: f64, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("phased_yp", &[theta, phi], &[qubit])
    }

    /// Apply phased parameterized Z gate.
    pub fn phased_zp(&mut self, theta: f64, phi: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("phased_zp", &[theta, phi], &[qubit])
    }

    /// Apply universal U gate U(θ, φ, λ).
    pub fn u(&mut self, theta: f64, phi: f64, lam: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("u", &[theta, phi, lam], &[qubit])
    }

    /// Apply U3 gate.
    pub fn u3(&mut self, theta: f64, phi: f64, lam: f64, qubit: u32) -> CircuitResult<&mut Self> {
        self.push_gate("u3", &[theta, phi, lam], &[qubit])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cx", &[], &[control, target])
    }

    /// Apply controlled-Y gate.
    pub fn cy(&mut self, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cy", &[], &[control, target])
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cz", &[], &[control, target])
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ch", &[], &[control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("swap", &[], &[q1, q2])
    }

    /// Apply iSWAP gate.
    pub fn iswap(&mut self, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("iswap", &[], &[q1, q2])
    }

    /// Apply DCX (double-CNOT) gate.
    pub fn dcx(&mut self, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("dcx", &[], &[q1, q2])
    }

    /// Apply echoed cross-resonance gate.
    pub fn ecr(&mut self, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ecr", &[], &[q1, q2])
    }

    /// Apply controlled sqrt(X) gate.
    pub fn csx(&mut self, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("csx", &[], &[control, target])
    }

    /// Apply controlled-Rx gate.
    pub fn crx(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("crx", &[theta], &[control, target])
    }

    /// Apply controlled-Ry gate.
    pub fn cry(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cry", &[theta], &[control, target])
    }

    /// Apply controlled-Rz gate.
    pub fn crz(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("crz", &[theta], &[control, target])
    }

    /// Apply uniformly-controlled Rx gate.
    pub fn ucrx(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ucrx", &[theta], &[control, target])
    }

    /// Apply uniformly-controlled Ry gate.
    pub fn ucry(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ucry", &[theta], &[control, target])
    }

    /// Apply uniformly-controlled Rz gate.
    pub fn ucrz(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ucrz", &[theta], &[control, target])
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cp", &[theta], &[control, target])
    }

    /// Apply controlled-U1 gate.
    pub fn cu1(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cu1", &[theta], &[control, target])
    }

    /// Apply parameterized CNOT gate.
    pub fn cnotp(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cnotp", &[theta], &[control, target])
    }

    /// Apply parameterized controlled-Y gate.
    pub fn cyp(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cyp", &[theta], &[control, target])
    }

    /// Apply parameterized controlled-Z gate.
    pub fn czp(&mut self, theta: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("czp", &[theta], &[control, target])
    }

    /// Apply XX rotation gate.
    pub fn rxx(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("rxx", &[theta], &[q1, q2])
    }

    /// Apply YY rotation gate.
    pub fn ryy(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ryy", &[theta], &[q1, q2])
    }

    /// Apply ZZ rotation gate.
    pub fn rzz(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("rzz", &[theta], &[q1, q2])
    }

    /// Apply ZX rotation gate.
    pub fn rzx(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("rzx", &[theta], &[q1, q2])
    }

    /// Apply parameterized XX gate.
    pub fn xxp(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("xxp", &[theta], &[q1, q2])
    }

    /// Apply parameterized YY gate.
    pub fn yyp(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("yyp", &[theta], &[q1, q2])
    }

    /// Apply parameterized ZZ gate.
    pub fn zzp(&mut self, theta: f64, q1: u32, q2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("zzp", &[theta], &[q1, q2])
    }

    /// Apply controlled-U2 gate.
    pub fn cu2(&mut self, phi: f64, lam: f64, control: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cu2", &[phi, lam], &[control, target])
    }

    /// Apply controlled-R gate.
    pub fn cr(
        &mut self,
        theta: f64,
        phi: f64,
        lam: f64,
        control: u32,
        target: u32,
    ) -> CircuitResult<&mut Self> {
        self.push_gate("cr", &[theta, phi, lam], &[control, target])
    }

    /// Apply controlled-U3 gate.
    pub fn cu3(
        &mut self,
        theta: f64,
        phi: f64,
        lam: f64,
        control: u32,
        target: u32,
    ) -> CircuitResult<&mut Self> {
        self.push_gate("cu3", &[theta, phi, lam], &[control, target])
    }

    /// Apply controlled-U gate with a global phase parameter.
    pub fn cu(
        &mut self,
        theta: f64,
        phi: f64,
        lam: f64,
        gamma: f64,
        control: u32,
        target: u32,
    ) -> CircuitResult<&mut Self> {
        self.push_gate("cu", &[theta, phi, lam, gamma], &[control, target])
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: u32, t1: u32, t2: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cswap", &[], &[control, t1, t2])
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccx", &[], &[c1, c2, target])
    }

    /// Apply doubly-controlled Y gate.
    pub fn ccy(&mut self, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccy", &[], &[c1, c2, target])
    }

    /// Apply doubly-controlled Z gate.
    pub fn ccz(&mut self, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccz", &[], &[c1, c2, target])
    }

    /// Apply doubly-controlled phase gate.
    pub fn ccp(&mut self, theta: f64, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccp", &[theta], &[c1, c2, target])
    }

    /// Apply parameterized Toffoli gate.
    pub fn ccnotp(&mut self, theta: f64, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccnotp", &[theta], &[c1, c2, target])
    }

    /// Apply parameterized doubly-controlled Y gate.
    pub fn ccyp(&mut self, theta: f64, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("ccyp", &[theta], &[c1, c2, target])
    }

    /// Apply parameterized doubly-controlled Z gate.
    pub fn cczp(&mut self, theta: f64, c1: u32, c2: u32, target: u32) -> CircuitResult<&mut Self> {
        self.push_gate("cczp", &[theta], &[c1, c2, target])
    }

    // =========================================================================
    // Multi-qubit gates (arity derived from the wire name length)
    // =========================================================================

    /// Apply triply-controlled X gate.
    pub fn c3x(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("c3x", &[], qubits)
    }

    /// Apply quadruply-controlled X gate.
    pub fn c4x(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("c4x", &[], qubits)
    }

    /// Apply multi-controlled X gate.
    pub fn mcx(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcx", &[], qubits)
    }

    /// Apply multi-controlled Z gate.
    pub fn mcz(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcz", &[], qubits)
    }

    /// Apply multi-controlled phase gate.
    pub fn mcp(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcp", &[], qubits)
    }

    /// Apply multi-controlled Rx gate.
    pub fn mcrx(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcrx", &[], qubits)
    }

    /// Apply multi-controlled Ry gate.
    pub fn mcry(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcry", &[], qubits)
    }

    /// Apply multi-controlled Rz gate.
    pub fn mcrz(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcrz", &[], qubits)
    }

    /// Apply multi-controlled Toffoli gate.
    pub fn mct(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mct", &[], qubits)
    }

    /// Apply multi-controlled U1 gate.
    pub fn mcu1(&mut self, theta: f64, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcu1", &[theta], qubits)
    }

    /// Apply multi-controlled U2 gate.
    pub fn mcu2(&mut self, phi: f64, lam: f64, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcu2", &[phi, lam], qubits)
    }

    /// Apply multi-controlled U3 gate.
    pub fn mcu3(&mut self, theta: f64, phi: f64, lam: f64, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("mcu3", &[theta, phi, lam], qubits)
    }

    /// Apply quantum Fourier transform.
    pub fn qft(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("qft", &[], qubits)
    }

    /// Apply inverse quantum Fourier transform (wire name `iqft`).
    pub fn inverse_qft(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        self.push_gate("iqft", &[], qubits)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Mark the given qubits for measurement.
    ///
    /// May be called multiple times; all measured indices are pooled into
    /// one flat list at serialization time, in encounter order.
    pub fn measure(&mut self, qubits: &[u32]) -> CircuitResult<&mut Self> {
        if qubits.is_empty() {
            return Err(CircuitError::EmptyMeasurement);
        }
        self.check_bounds(qubits)?;
        self.operations
            .push(Operation::new(MEASURE, vec![], qubits.to_vec()));
        Ok(self)
    }

    /// Mark every qubit for measurement, in index order.
    pub fn measure_all(&mut self) -> CircuitResult<&mut Self> {
        let qubits: Vec<u32> = (0..self.num_qubits).collect();
        self.operations.push(Operation::new(MEASURE, vec![], qubits));
        Ok(self)
    }

    // =========================================================================
    // Random circuit generation
    // =========================================================================

    /// Append `num_operations` uniformly random gates drawn from the fixed
    /// random pool, targeting qubits chosen from `candidate_qubits`.
    ///
    /// Qubits for each gate are chosen by shuffling the candidates and
    /// taking the first `arity`. Rotation gates (`rx ry rz crx cry crz`)
    /// get one angle drawn uniformly from `[0, 2π)`. The random source is
    /// injected so callers (and tests) control seeding.
    pub fn extend_random<R: Rng>(
        &mut self,
        num_operations: usize,
        candidate_qubits: &[u32],
        rng: &mut R,
    ) -> CircuitResult<&mut Self> {
        if candidate_qubits.len() < 3 {
            return Err(CircuitError::TooFewRandomQubits(candidate_qubits.len()));
        }

        let mut scratch = candidate_qubits.to_vec();
        for _ in 0..num_operations {
            let name = RANDOM_GATE_POOL[rng.gen_range(0..RANDOM_GATE_POOL.len())];
            // Pool gates are all in the catalog; lookup cannot fail.
            let arity = GateSpec::lookup(name)
                .ok_or_else(|| CircuitError::UnknownGate(name.to_string()))?
                .required_qubits() as usize;

            scratch.shuffle(rng);
            let params: Vec<f64> = match name {
                "rx" | "ry" | "rz" | "crx" | "cry" | "crz" => {
                    vec![rng.gen_range(0.0..std::f64::consts::TAU)]
                }
                _ => vec![],
            };
            let qubits = scratch[..arity].to_vec();
            self.push_gate(name, &params, &qubits)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_rejects_zero_qubits() {
        assert!(matches!(
            Circuit::new(0),
            Err(CircuitError::InvalidQubitCount)
        ));
    }

    #[test]
    fn append_preserves_order_and_content() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(0).unwrap().cx(0, 1).unwrap().rx(0.25, 1).unwrap();

        let ops = circuit.operations();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].gate(), "h");
        assert_eq!(ops[0].qubits(), &[0]);
        assert_eq!(ops[0].params(), &[] as &[f64]);
        assert_eq!(ops[1].gate(), "cx");
        assert_eq!(ops[1].qubits(), &[0, 1]);
        assert_eq!(ops[2].gate(), "rx");
        assert_eq!(ops[2].params(), &[0.25]);
    }

    #[test]
    fn push_gate_rejects_unknown_names() {
        let mut circuit = Circuit::new(1).unwrap();
        let err = circuit.push_gate("hadamard", &[], &[0]).unwrap_err();
        assert!(matches!(err, CircuitError::UnknownGate(name) if name == "hadamard"));
    }

    #[test]
    fn wrong_qubit_count_is_rejected() {
        let mut circuit = Circuit::new(3).unwrap();
        let err = circuit.push_gate("cx", &[], &[0]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));

        let err = circuit.push_gate("h", &[], &[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::QubitCountMismatch {
                expected: 1,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_qubit_is_rejected() {
        let mut circuit = Circuit::new(2).unwrap();
        let err = circuit.h(2).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2,
            }
        ));
        // Nothing was recorded.
        assert!(circuit.operations().is_empty());
    }

    #[test]
    fn wrong_param_count_is_rejected() {
        let mut circuit = Circuit::new(1).unwrap();
        let err = circuit.push_gate("rx", &[], &[0]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::ParamCountMismatch {
                expected: 1,
                got: 0,
                ..
            }
        ));
    }

    #[test]
    fn cu_records_four_params() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.cu(0.1, 0.2, 0.3, 0.4, 0, 1).unwrap();
        let op = &circuit.operations()[0];
        assert_eq!(op.gate(), "cu");
        assert_eq!(op.params(), &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn inverse_qft_uses_iqft_wire_name() {
        let mut circuit = Circuit::new(4).unwrap();
        // "iqft" is 4 chars: floor(log2(4)) = 2 qubits required.
        circuit.inverse_qft(&[0, 1]).unwrap();
        assert_eq!(circuit.operations()[0].gate(), "iqft");
    }

    #[test]
    fn name_length_arity_enforced() {
        let mut circuit = Circuit::new(8).unwrap();
        // "qft" is 3 chars: floor(log2(3)) = 1 qubit.
        circuit.qft(&[3]).unwrap();
        let err = circuit.qft(&[0, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::QubitCountMismatch {
                expected: 1,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn measure_empty_is_rejected() {
        let mut circuit = Circuit::new(2).unwrap();
        assert!(matches!(
            circuit.measure(&[]),
            Err(CircuitError::EmptyMeasurement)
        ));
    }

    #[test]
    fn measure_checks_bounds() {
        let mut circuit = Circuit::new(2).unwrap();
        assert!(matches!(
            circuit.measure(&[0, 5]),
            Err(CircuitError::QubitOutOfRange { qubit: 5, .. })
        ));
    }

    #[test]
    fn measure_all_covers_every_qubit() {
        let mut circuit = Circuit::new(4).unwrap();
        circuit.measure_all().unwrap();
        let op = &circuit.operations()[0];
        assert!(op.is_measurement());
        assert_eq!(op.qubits(), &[0, 1, 2, 3]);
    }

    #[test]
    fn duplicate_measurements_are_preserved() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.measure(&[1, 1]).unwrap().measure(&[0]).unwrap();
        assert_eq!(circuit.operations()[0].qubits(), &[1, 1]);
        assert_eq!(circuit.operations()[1].qubits(), &[0]);
    }

    #[test]
    fn extend_random_needs_three_candidates() {
        let mut circuit = Circuit::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            circuit.extend_random(10, &[0, 1], &mut rng),
            Err(CircuitError::TooFewRandomQubits(2))
        ));
    }

    #[test]
    fn extend_random_appends_exact_count() {
        let mut circuit = Circuit::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        circuit.extend_random(25, &[0, 1, 2, 3], &mut rng).unwrap();
        assert_eq!(circuit.operations().len(), 25);
        for op in circuit.operations() {
            let spec = GateSpec::lookup(op.gate()).unwrap();
            assert_eq!(op.qubits().len() as u32, spec.required_qubits());
            assert_eq!(op.params().len(), spec.params);
            assert!(op.qubits().iter().all(|&q| q < 4));
        }
    }
}
