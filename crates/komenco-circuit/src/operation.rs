//! A single recorded gate application.

use serde::{Deserialize, Serialize};

use crate::gate::MEASURE;

/// One gate application in a circuit.
///
/// Operations are immutable once recorded: the fields are private and only
/// read access is exposed. The serialized form uses exactly the wire field
/// names the Komenco service expects (`gate`, `params`, `qubits`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    gate: String,
    params: Vec<f64>,
    qubits: Vec<u32>,
}

impl Operation {
    /// Record a new operation. Validation happens in `Circuit`; this
    /// constructor is crate-internal so holders of an `Operation` can
    /// rely on it having been checked at append time.
    pub(crate) fn new(gate: impl Into<String>, params: Vec<f64>, qubits: Vec<u32>) -> Self {
        Self {
            gate: gate.into(),
            params,
            qubits,
        }
    }

    /// Wire name of the gate.
    pub fn gate(&self) -> &str {
        &self.gate
    }

    /// Gate parameters (rotation angles etc.), possibly empty.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Target qubit indices, in application order.
    pub fn qubits(&self) -> &[u32] {
        &self.qubits
    }

    /// Whether this operation marks qubits for measurement.
    pub fn is_measurement(&self) -> bool {
        self.gate == MEASURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_detection() {
        let op = Operation::new(MEASURE, vec![], vec![0, 1]);
        assert!(op.is_measurement());

        let op = Operation::new("h", vec![], vec![0]);
        assert!(!op.is_measurement());
    }

    #[test]
    fn wire_field_names() {
        let op = Operation::new("rx", vec![0.5], vec![2]);
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"gate": "rx", "params": [0.5], "qubits": [2]})
        );
    }
}
