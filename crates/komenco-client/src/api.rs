//! Komenco wire schema: request and response bodies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use komenco_circuit::{Circuit, Operation};

use crate::error::{ClientError, ClientResult};

/// Request body for `POST /api/komenco`.
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    /// Number of qubits in the circuit.
    pub num_qubits: u32,
    /// Non-measurement operations, in execution order.
    pub operations: Vec<Operation>,
    /// Flattened measured qubit indices, in encounter order across all
    /// measurement operations. Duplicates are preserved as given.
    pub measurements: Vec<u32>,
    /// Maximum number of distinct outcomes the service should return.
    #[serde(rename = "topK")]
    pub top_k: u32,
}

impl RunRequest {
    /// Serialize a circuit into request form.
    ///
    /// Partitions the circuit's operation stream: gate operations keep
    /// their order, measurement operations are pooled into the flat
    /// `measurements` list. Fails with [`ClientError::NoMeasurements`]
    /// when that list comes out empty — the request must never reach the
    /// wire in that state.
    pub fn from_circuit(circuit: &Circuit, top_k: u32) -> ClientResult<Self> {
        let mut operations = Vec::new();
        let mut measurements = Vec::new();

        for op in circuit.operations() {
            if op.is_measurement() {
                measurements.extend_from_slice(op.qubits());
            } else {
                operations.push(op.clone());
            }
        }

        if measurements.is_empty() {
            return Err(ClientError::NoMeasurements);
        }

        Ok(Self {
            num_qubits: circuit.num_qubits(),
            operations,
            measurements,
            top_k,
        })
    }
}

/// Response body from `POST /api/komenco`.
///
/// A failure response carries `error`; a success response carries
/// `measurements` mapping bitstring labels to probabilities in `[0, 1]`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    /// Error message, present on failure.
    #[serde(default)]
    pub error: Option<String>,
    /// Probability per bitstring, present on success.
    #[serde(default)]
    pub measurements: Option<FxHashMap<String, f64>>,
}
