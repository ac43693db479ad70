//! HTTP boundary to the prediction service.

use std::time::Duration;

use log::debug;

use crate::core::errors::{PredictorError, Result};

/// Status and raw body of whatever the service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON body to the prediction endpoint.
///
/// Any HTTP status comes back as `Ok`; only failures to obtain a reply are
/// errors. Unreachable hosts must map to [`PredictorError::Connection`].
pub trait PredictionTransport {
    fn post_json(&self, endpoint: &str, body: &str) -> Result<HttpReply>;
}

/// Longest wait for a TCP connection to the service.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking transport backed by a [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
    connect_timeout: Duration,
}

impl UreqTransport {
    /// Build a transport.
    ///
    /// With `timeout: None` a connected request waits for the reply
    /// indefinitely, but connecting still gives up after [`CONNECT_TIMEOUT`]
    /// and reports a connection error. A configured `timeout` bounds the
    /// whole request, connect included.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let connect_timeout = timeout.map_or(CONNECT_TIMEOUT, |t| t.min(CONNECT_TIMEOUT));
        let mut builder = ureq::AgentBuilder::new().timeout_connect(connect_timeout);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            connect_timeout,
        }
    }

    /// Effective bound on establishing the connection.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

impl PredictionTransport for UreqTransport {
    fn post_json(&self, endpoint: &str, body: &str) -> Result<HttpReply> {
        let result = self
            .agent
            .post(endpoint)
            .set("Content-Type", "application/json")
            .send_string(body);

        match result {
            Ok(response) => {
                let status = response.status();
                let body = read_body(response)?;
                Ok(HttpReply { status, body })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = read_body(response)?;
                Ok(HttpReply { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                debug!("transport failure ({:?}): {transport}", transport.kind());
                match transport.kind() {
                    ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                        Err(PredictorError::Connection {
                            endpoint: endpoint.to_string(),
                            details: transport.to_string(),
                        })
                    }
                    _ => Err(PredictorError::Runtime {
                        details: transport.to_string(),
                    }),
                }
            }
        }
    }
}

fn read_body(response: ureq::Response) -> Result<String> {
    response.into_string().map_err(|e| PredictorError::Runtime {
        details: format!("failed to read response body: {e}"),
    })
}
