//! Prediction submission: form values, wire request, HTTP transport, typed
//! response parse, and the rendered outcome.

pub mod client;
pub mod request;
pub mod response;
pub mod transport;
pub mod view;

pub use client::{PredictionClient, submit_prediction};
pub use request::{ApplicantForm, NumericField, Occupation, PredictionRequest};
pub use response::{ClassProbability, PredictionResponse};
pub use transport::{HttpReply, PredictionTransport, UreqTransport};
pub use view::{ErrorBanner, ErrorKind, PredictionView, ProbabilityBar, RenderedResult, RiskTier};
