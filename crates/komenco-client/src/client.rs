//! The Komenco execution client.

use std::time::Instant;

use tracing::{debug, info};

use komenco_circuit::Circuit;

use crate::api::RunRequest;
use crate::error::{ClientError, ClientResult};
use crate::result::Counts;
use crate::transport::{HttpTransport, Transport};

/// Client for one Komenco execution service.
///
/// Stateless apart from its transport: each [`run`](Self::run) serializes
/// the circuit, performs exactly one request, and rescales the returned
/// probability table into counts. Concurrent `run` calls on a shared
/// client are safe; the transport is the only shared piece and it is
/// immutable.
#[derive(Debug, Clone)]
pub struct KomencoClient<T: Transport = HttpTransport> {
    transport: T,
}

impl KomencoClient<HttpTransport> {
    /// Create a client for the service at `http://{host}:{port}`.
    pub fn connect(host: &str, port: u16) -> Self {
        Self {
            transport: HttpTransport::new(host, port),
        }
    }
}

impl<T: Transport> KomencoClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a circuit remotely and return measurement counts.
    ///
    /// `repetitions` scales the returned probabilities into integer
    /// counts; `top_k` caps how many distinct outcomes the service
    /// reports. One blocking round-trip, no retries: transport failures
    /// and service-reported errors surface directly as
    /// [`ClientError`] variants.
    pub fn run(&self, circuit: &Circuit, repetitions: u64, top_k: u32) -> ClientResult<Counts> {
        let request = RunRequest::from_circuit(circuit, top_k)?;
        info!(
            num_qubits = request.num_qubits,
            gates = request.operations.len(),
            "executing quantum circuit"
        );

        let started = Instant::now();
        let response = self.transport.execute(&request)?;
        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        // An explicit error wins; the measurements field is not consulted.
        if let Some(message) = response.error {
            return Err(ClientError::Remote(message));
        }

        let probabilities = response.measurements.ok_or_else(|| {
            ClientError::MalformedResponse("response is missing the 'measurements' field".into())
        })?;

        Ok(Counts::from_probabilities(&probabilities, repetitions))
    }
}
