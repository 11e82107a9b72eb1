//! The gate catalog: wire names, qubit arities, parameter arities.
//!
//! Every gate the Komenco service understands has one entry here. The
//! catalog is the single source of truth consulted by
//! [`Circuit::push_gate`](crate::Circuit::push_gate); the named
//! convenience methods on `Circuit` are thin wrappers that route through
//! the same validation.

/// Wire name of the measurement pseudo-operation.
///
/// Measurements are recorded in the operation stream like gates, but are
/// pulled out into the request's flat `measurements` list at serialization
/// time rather than sent as operations.
pub const MEASURE: &str = "measure";

/// Qubit-count rule for a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The gate acts on exactly this many qubits.
    Fixed(u32),
    /// The required qubit count is `floor(log2(len(wire name)))`.
    ///
    /// This is the rule the Komenco service applies to its multi-qubit
    /// gate family (`mcx`, `qft`, ...). It has no semantic justification —
    /// it is a convention of the wire protocol and must be reproduced
    /// exactly for compatibility with existing servers.
    NameLength,
}

/// One entry in the gate catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSpec {
    /// Gate identifier as sent on the wire.
    pub name: &'static str,
    /// Qubit-count rule.
    pub qubits: Arity,
    /// Exact number of real-valued parameters.
    pub params: usize,
}

impl GateSpec {
    /// Look up a gate by its wire name.
    pub fn lookup(name: &str) -> Option<&'static GateSpec> {
        GATE_CATALOG.iter().find(|spec| spec.name == name)
    }

    /// Number of qubits this gate must be applied to.
    pub fn required_qubits(&self) -> u32 {
        match self.qubits {
            Arity::Fixed(n) => n,
            Arity::NameLength => self.name.len().ilog2(),
        }
    }
}

const fn gate(name: &'static str, qubits: Arity, params: usize) -> GateSpec {
    GateSpec {
        name,
        qubits,
        params,
    }
}

/// Every gate accepted by the Komenco service.
pub static GATE_CATALOG: &[GateSpec] = &[
    // Single-qubit, parameterless
    gate("id", Arity::Fixed(1), 0),
    gate("x", Arity::Fixed(1), 0),
    gate("y", Arity::Fixed(1), 0),
    gate("z", Arity::Fixed(1), 0),
    gate("h", Arity::Fixed(1), 0),
    gate("s", Arity::Fixed(1), 0),
    gate("sdg", Arity::Fixed(1), 0),
    gate("t", Arity::Fixed(1), 0),
    gate("tdg", Arity::Fixed(1), 0),
    gate("sx", Arity::Fixed(1), 0),
    gate("sxdg", Arity::Fixed(1), 0),
    gate("sqrt_x", Arity::Fixed(1), 0),
    gate("sqrt_y", Arity::Fixed(1), 0),
    gate("sqrt_z", Arity::Fixed(1), 0),
    // Single-qubit rotations and phases
    gate("rx", Arity::Fixed(1), 1),
    gate("ry", Arity::Fixed(1), 1),
    gate("rz", Arity::Fixed(1), 1),
    gate("p", Arity::Fixed(1), 1),
    gate("u1", Arity::Fixed(1), 1),
    gate("gpi", Arity::Fixed(1), 1),
    gate("gpi2", Arity::Fixed(1), 1),
    gate("xp", Arity::Fixed(1), 1),
    gate("yp", Arity::Fixed(1), 1),
    gate("zp", Arity::Fixed(1), 1),
    gate("r", Arity::Fixed(1), 2),
    gate("u2", Arity::Fixed(1), 2),
    gate("phased_xp", Arity::Fixed(1), 2),
    gate("phased_yp", Arity::Fixed(1), 2),
    gate("phased_zp", Arity::Fixed(1), 2),
    gate("u", Arity::Fixed(1), 3),
    gate("u3", Arity::Fixed(1), 3),
    // Two-qubit, parameterless
    gate("cx", Arity::Fixed(2), 0),
    gate("cy", Arity::Fixed(2), 0),
    gate("cz", Arity::Fixed(2), 0),
    gate("ch", Arity::Fixed(2), 0),
    gate("swap", Arity::Fixed(2), 0),
    gate("iswap", Arity::Fixed(2), 0),
    gate("dcx", Arity::Fixed(2), 0),
    gate("ecr", Arity::Fixed(2), 0),
    gate("csx", Arity::Fixed(2), 0),
    // Two-qubit, parameterized
    gate("crx", Arity::Fixed(2), 1),
    gate("cry", Arity::Fixed(2), 1),
    gate("crz", Arity::Fixed(2), 1),
    gate("ucrx", Arity::Fixed(2), 1),
    gate("ucry", Arity::Fixed(2), 1),
    gate("ucrz", Arity::Fixed(2), 1),
    gate("cp", Arity::Fixed(2), 1),
    gate("cu1", Arity::Fixed(2), 1),
    gate("cnotp", Arity::Fixed(2), 1),
    gate("cyp", Arity::Fixed(2), 1),
    gate("czp", Arity::Fixed(2), 1),
    gate("rxx", Arity::Fixed(2), 1),
    gate("ryy", Arity::Fixed(2), 1),
    gate("rzz", Arity::Fixed(2), 1),
    gate("rzx", Arity::Fixed(2), 1),
    gate("xxp", Arity::Fixed(2), 1),
    gate("yyp", Arity::Fixed(2), 1),
    gate("zzp", Arity::Fixed(2), 1),
    gate("cu2", Arity::Fixed(2), 2),
    gate("cr", Arity::Fixed(2), 3),
    gate("cu3", Arity::Fixed(2), 3),
    gate("cu", Arity::Fixed(2), 4),
    // Three-qubit
    gate("cswap", Arity::Fixed(3), 0),
    gate("ccx", Arity::Fixed(3), 0),
    gate("ccy", Arity::Fixed(3), 0),
    gate("ccz", Arity::Fixed(3), 0),
    gate("ccp", Arity::Fixed(3), 1),
    gate("ccnotp", Arity::Fixed(3), 1),
    gate("ccyp", Arity::Fixed(3), 1),
    gate("cczp", Arity::Fixed(3), 1),
    // Multi-qubit family: qubit count derived from the wire name length
    gate("c3x", Arity::NameLength, 0),
    gate("c4x", Arity::NameLength, 0),
    gate("mcx", Arity::NameLength, 0),
    gate("mcz", Arity::NameLength, 0),
    gate("mcp", Arity::NameLength, 0),
    gate("mcrx", Arity::NameLength, 0),
    gate("mcry", Arity::NameLength, 0),
    gate("mcrz", Arity::NameLength, 0),
    gate("mct", Arity::NameLength, 0),
    gate("qft", Arity::NameLength, 0),
    gate("iqft", Arity::NameLength, 0),
    gate("mcu1", Arity::NameLength, 1),
    gate("mcu2", Arity::NameLength, 2),
    gate("mcu3", Arity::NameLength, 3),
];

/// Gates eligible for random circuit generation, as fixed by the service's
/// reference clients: 13 one-qubit, 12 two-qubit, 2 three-qubit gates.
pub static RANDOM_GATE_POOL: &[&str] = &[
    "x", "y", "z", "rx", "ry", "rz", "h", "s", "sdg", "t", "tdg", "sx", "sxdg", // 1-qubit
    "cx", "cy", "cz", "crx", "cry", "crz", "ch", "dcx", "ecr", "iswap", "swap", "csx", // 2-qubit
    "cswap", "ccx", // 3-qubit
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_gate() {
        let spec = GateSpec::lookup("cx").unwrap();
        assert_eq!(spec.required_qubits(), 2);
        assert_eq!(spec.params, 0);
    }

    #[test]
    fn lookup_unknown_gate() {
        assert!(GateSpec::lookup("frobnicate").is_none());
        assert!(GateSpec::lookup("measure").is_none());
    }

    #[test]
    fn name_length_arity_is_floor_log2() {
        // qft: 3 chars -> floor(log2(3)) = 1
        assert_eq!(GateSpec::lookup("qft").unwrap().required_qubits(), 1);
        // mcu1: 4 chars -> floor(log2(4)) = 2
        assert_eq!(GateSpec::lookup("mcu1").unwrap().required_qubits(), 2);
        // iqft: 4 chars -> 2
        assert_eq!(GateSpec::lookup("iqft").unwrap().required_qubits(), 2);
        // mcx: 3 chars -> 1
        assert_eq!(GateSpec::lookup("mcx").unwrap().required_qubits(), 1);
    }

    #[test]
    fn random_pool_is_subset_of_catalog() {
        for name in RANDOM_GATE_POOL {
            let spec = GateSpec::lookup(name)
                .unwrap_or_else(|| panic!("random pool gate '{name}' missing from catalog"));
            assert!(matches!(spec.qubits, Arity::Fixed(1..=3)));
        }
    }

    #[test]
    fn catalog_has_no_duplicates() {
        for (i, spec) in GATE_CATALOG.iter().enumerate() {
            assert!(
                !GATE_CATALOG[i + 1..].iter().any(|other| other.name == spec.name),
                "duplicate catalog entry '{}'",
                spec.name
            );
        }
    }

    #[test]
    fn cu_takes_four_params() {
        assert_eq!(GateSpec::lookup("cu").unwrap().params, 4);
        assert_eq!(GateSpec::lookup("cu1").unwrap().params, 1);
    }
}
