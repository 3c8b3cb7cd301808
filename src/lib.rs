//! Titanic survival predictor: form state, request lifecycle and rendering.
//!
//! The core types here are free of any browser dependency so the controller
//! can be driven and tested on the host; `components` and the binary wire it
//! into a Yew page.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod client;
pub mod components;
pub mod config;
pub mod controller;
pub mod fields;
pub mod view;

pub use client::{HttpPredictionClient, PredictError, PredictionClient};
pub use controller::{run_prediction, Controller};
pub use fields::{Field, FieldDescriptor, FieldKind, FORM_ROWS};
pub use view::FormView;

/// A single form value as the input controls hold it.
///
/// Defaults are numbers; anything typed or picked by the user arrives as the
/// control's raw text and is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// The five passenger attributes submitted for prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub age: FieldValue,
    pub gender: FieldValue,
    pub p_class: FieldValue,
    pub parch: FieldValue,
    pub sibs: FieldValue,
}

impl Default for FormData {
    fn default() -> Self {
        use config::defaults;
        Self {
            age: FieldValue::Number(defaults::AGE),
            gender: FieldValue::Text(defaults::GENDER.to_string()),
            p_class: FieldValue::Number(defaults::PASSENGER_CLASS),
            parch: FieldValue::Number(defaults::PARCH),
            sibs: FieldValue::Number(defaults::SIBS),
        }
    }
}

impl FormData {
    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::PassengerClass => &self.p_class,
            Field::Parch => &self.parch,
            Field::Sibs => &self.sibs,
        }
    }

    /// Replace one field, leaving the other four untouched.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        let slot = match field {
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::PassengerClass => &mut self.p_class,
            Field::Parch => &mut self.parch,
            Field::Sibs => &mut self.sibs,
        };
        *slot = value;
    }
}

/// Whether a prediction request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
}

impl RequestState {
    pub fn is_submitting(self) -> bool {
        self == RequestState::Submitting
    }
}

/// Everything the page shows. An empty `result` means nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub form: FormData,
    pub request: RequestState,
    pub result: String,
}

/// Body returned by the prediction service.
///
/// Any JSON object is accepted. The service's error reply carries no
/// `result`, which then reads as empty. `status` is kept for logging and
/// every other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub status: Option<String>,
}
