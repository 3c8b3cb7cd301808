//! Application-level configuration constants.

// Prediction service
pub const PREDICTION_ENDPOINT: &str = "http://127.0.0.1:5000/prediction/";

// Page text
pub const PAGE_TITLE: &str = "Titanic Survival Predictor";
pub const PREDICT_LABEL: &str = "Predict";
pub const SUBMITTING_LABEL: &str = "Making prediction";
pub const RESET_LABEL: &str = "Reset prediction";

/// Initial form values
pub mod defaults {
    pub const AGE: i64 = 0;
    pub const GENDER: &str = "male";
    pub const PASSENGER_CLASS: i64 = 1;
    pub const PARCH: i64 = 0;
    pub const SIBS: i64 = 0;
}
