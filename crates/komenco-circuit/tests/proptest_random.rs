//! Property-based tests for random circuit generation.
//!
//! Every generated operation must satisfy the same invariants as a
//! hand-built one: catalog membership, exact gate arity, exact parameter
//! count, and in-range qubit indices.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use komenco_circuit::{Circuit, GateSpec, RANDOM_GATE_POOL};

proptest! {
    #[test]
    fn random_operations_are_well_formed(
        seed in any::<u64>(),
        num_ops in 0usize..60,
        num_candidates in 3u32..8,
    ) {
        let num_qubits = 8;
        let candidates: Vec<u32> = (0..num_candidates).collect();

        let mut circuit = Circuit::new(num_qubits).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        circuit.extend_random(num_ops, &candidates, &mut rng).unwrap();

        prop_assert_eq!(circuit.operations().len(), num_ops);

        for op in circuit.operations() {
            prop_assert!(RANDOM_GATE_POOL.contains(&op.gate()));

            let spec = GateSpec::lookup(op.gate()).unwrap();
            prop_assert_eq!(op.qubits().len() as u32, spec.required_qubits());
            prop_assert_eq!(op.params().len(), spec.params);

            for &q in op.qubits() {
                prop_assert!(candidates.contains(&q));
            }
            for &theta in op.params() {
                prop_assert!((0.0..std::f64::consts::TAU).contains(&theta));
            }
        }
    }

    #[test]
    fn same_seed_same_circuit(seed in any::<u64>()) {
        let candidates = [0u32, 1, 2, 3];

        let mut a = Circuit::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        a.extend_random(20, &candidates, &mut rng).unwrap();

        let mut b = Circuit::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        b.extend_random(20, &candidates, &mut rng).unwrap();

        prop_assert_eq!(a, b);
    }
}
