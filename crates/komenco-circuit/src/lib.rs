//! Komenco circuit model.
//!
//! This crate provides the in-memory representation of a quantum circuit
//! destined for the Komenco execution service: a fixed qubit count plus an
//! ordered, append-only sequence of gate operations.
//!
//! # Core components
//!
//! - **Circuit**: [`Circuit`] builder with named methods for every
//!   supported gate, plus measurement and random-circuit helpers
//! - **Gate catalog**: [`GateSpec`] / [`GATE_CATALOG`], the declarative
//!   table of wire names, qubit arities, and parameter arities that backs
//!   all validation
//! - **Operations**: [`Operation`], one immutable recorded gate
//!   application in wire-schema form
//!
//! # Example: building a Bell state
//!
//! ```rust
//! use komenco_circuit::Circuit;
//!
//! let mut circuit = Circuit::new(2)?;
//! circuit.h(0)?.cx(0, 1)?.measure_all()?;
//!
//! assert_eq!(circuit.operations().len(), 3);
//! # Ok::<(), komenco_circuit::CircuitError>(())
//! ```
//!
//! # Validation
//!
//! Every append checks gate arity (from the catalog) and qubit bounds
//! before recording anything, so a `Circuit` in hand is always
//! well-formed. The multi-qubit gate family (`mcx`, `qft`, ...) derives
//! its required qubit count from the wire name length
//! (`floor(log2(len))`) — a protocol convention preserved for
//! compatibility with existing Komenco servers.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod operation;

pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use gate::{Arity, GATE_CATALOG, GateSpec, MEASURE, RANDOM_GATE_POOL};
pub use operation::Operation;
