//! Submission pipeline: validate, POST once, classify the reply, render.

use log::{debug, info, warn};

use super::request::{ApplicantForm, PredictionRequest};
use super::response::PredictionResponse;
use super::transport::{PredictionTransport, UreqTransport};
use super::view::RenderedResult;
use crate::core::config::ApiConfig;
use crate::core::errors::{PredictorError, Result};

/// Client bound to one prediction endpoint.
pub struct PredictionClient {
    endpoint: String,
    transport: Box<dyn PredictionTransport>,
}

impl PredictionClient {
    /// Client over an arbitrary transport.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, transport: Box<dyn PredictionTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    /// Client over HTTP using the configured endpoint and timeout.
    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(
            api.endpoint.clone(),
            Box::new(UreqTransport::new(api.timeout())),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate the form and, if valid, perform the single request.
    ///
    /// A blank city short-circuits before any network traffic.
    pub fn submit(&self, form: &ApplicantForm) -> RenderedResult {
        match PredictionRequest::from_form(form) {
            Ok(request) => self.send(&request),
            Err(err) => {
                info!("submission rejected locally: {err}");
                RenderedResult::from_error(&err)
            }
        }
    }

    /// Send an already validated request and render whatever comes back.
    pub fn send(&self, request: &PredictionRequest) -> RenderedResult {
        match self.fetch(request) {
            Ok(response) => {
                info!(
                    "prediction received: category={} confidence={:.3}",
                    response.predicted_category, response.confidence
                );
                RenderedResult::from_response(&response)
            }
            Err(err) => {
                info!("submission failed [{}]: {err}", err.code());
                RenderedResult::from_error(&err)
            }
        }
    }

    /// POST the request and parse a 200 body; every other outcome is an error.
    pub fn fetch(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let body = serde_json::to_string(request)?;
        debug!("POST {} {body}", self.endpoint);

        let reply = self.transport.post_json(&self.endpoint, &body)?;
        debug!("reply status {} ({} bytes)", reply.status, reply.body.len());

        if reply.status != 200 {
            if reply.status < 300 {
                warn!("treating non-200 success status {} as an error", reply.status);
            }
            return Err(PredictorError::Http {
                status: reply.status,
                body: reply.body,
            });
        }
        PredictionResponse::parse(&reply.body)
    }
}

/// Validate and submit `form` through `transport` in one call.
pub fn submit_prediction(
    form: &ApplicantForm,
    transport: Box<dyn PredictionTransport>,
    endpoint: &str,
) -> RenderedResult {
    PredictionClient::new(endpoint, transport).submit(form)
}
