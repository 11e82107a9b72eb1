//! HTTP client for the Komenco quantum execution service.
//!
//! This crate submits circuits built with [`komenco_circuit`] to a remote
//! Komenco service over one blocking HTTP POST and converts the returned
//! probability distribution into integer sample counts.
//!
//! # Protocol
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Endpoint | `POST http://{host}:{port}/api/komenco` |
//! | Request | `{num_qubits, operations, measurements, topK}` |
//! | Success response | `{"measurements": {"<bitstring>": <probability>}}` |
//! | Failure response | `{"error": "<message>"}` |
//!
//! # Example
//!
//! ```ignore
//! use komenco_circuit::Circuit;
//! use komenco_client::KomencoClient;
//!
//! let mut circuit = Circuit::new(2)?;
//! circuit.h(0)?.cx(0, 1)?.measure_all()?;
//!
//! let client = KomencoClient::connect("localhost", 80);
//! let counts = client.run(&circuit, 1000, 20)?;
//!
//! for (bitstring, count) in counts.sorted() {
//!     println!("  {} : {}", bitstring, count);
//! }
//! ```
//!
//! # Testing
//!
//! The [`Transport`] trait is the seam: substitute a fake transport with
//! [`KomencoClient::with_transport`] to exercise request construction and
//! result rehydration without a network.

pub mod api;
pub mod client;
pub mod error;
pub mod result;
pub mod transport;

pub use api::{RunRequest, RunResponse};
pub use client::KomencoClient;
pub use error::{ClientError, ClientResult};
pub use result::Counts;
pub use transport::{ENDPOINT_PATH, HttpTransport, Transport};
