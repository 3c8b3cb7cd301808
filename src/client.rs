//! Prediction service client.

use crate::config::PREDICTION_ENDPOINT;
use crate::{FormData, PredictionResponse};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use log::debug;
use reqwest::header::ACCEPT;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Pending outcome of one submission.
pub type PredictFuture = LocalBoxFuture<'static, Result<PredictionResponse, PredictError>>;

/// Anything that can turn a form snapshot into a prediction.
///
/// The returned future owns everything it needs, so the caller may keep
/// editing the form while it is pending.
pub trait PredictionClient {
    fn submit(&self, data: FormData) -> PredictFuture;
}

/// Posts the form as JSON to the prediction endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, data: &FormData) -> reqwest::RequestBuilder {
        // `json` also sets Content-Type: application/json
        self.http
            .post(self.endpoint())
            .header(ACCEPT, "application/json")
            .json(data)
    }
}

impl Default for HttpPredictionClient {
    fn default() -> Self {
        Self::new(PREDICTION_ENDPOINT)
    }
}

impl PredictionClient for HttpPredictionClient {
    fn submit(&self, data: FormData) -> PredictFuture {
        let request = self.request(&data);
        let endpoint = self.endpoint().to_string();
        async move {
            debug!("POST {}", endpoint);
            // The status code is not inspected; only the body decides.
            let body = request.send().await?.text().await?;
            let response: PredictionResponse = serde_json::from_str(&body)?;
            Ok::<_, PredictError>(response)
        }
        .boxed_local()
    }
}
