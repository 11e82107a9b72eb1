//! Error types for circuit construction.

use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Circuit was created with zero qubits.
    #[error("circuit must have at least one qubit")]
    InvalidQubitCount,

    /// Gate name is not in the catalog.
    #[error("unknown gate '{0}'")]
    UnknownGate(String),

    /// Gate was applied to the wrong number of qubits.
    #[error("gate '{gate}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Wire name of the gate.
        gate: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Gate was given the wrong number of parameters.
    #[error("gate '{gate}' requires {expected} parameters, got {got}")]
    ParamCountMismatch {
        /// Wire name of the gate.
        gate: String,
        /// Expected number of parameters.
        expected: usize,
        /// Actual number of parameters provided.
        got: usize,
    },

    /// Qubit index is outside the circuit.
    #[error("invalid qubit {qubit}: circuit has {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Measurement was requested over an empty qubit list.
    #[error("number of qubits to measure cannot be zero")]
    EmptyMeasurement,

    /// Random circuit generation needs at least three candidate qubits.
    #[error("random circuit generation requires at least 3 candidate qubits, got {0}")]
    TooFewRandomQubits(usize),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
