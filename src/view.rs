//! View model: what the page shows for a given [`ViewState`].

use crate::config::{PREDICT_LABEL, RESET_LABEL, SUBMITTING_LABEL};
use crate::fields::{FieldDescriptor, FORM_ROWS};
use crate::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    pub descriptor: FieldDescriptor,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub rows: Vec<Vec<ControlView>>,
    pub predict: ButtonView,
    pub reset: ButtonView,
    /// `None` hides the result region entirely.
    pub result: Option<String>,
}

impl FormView {
    pub fn from_state(state: &ViewState) -> Self {
        let submitting = state.request.is_submitting();

        let rows = FORM_ROWS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&field| ControlView {
                        descriptor: *field.descriptor(),
                        value: state.form.get(field).to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            predict: ButtonView {
                label: if submitting { SUBMITTING_LABEL } else { PREDICT_LABEL },
                disabled: submitting,
            },
            reset: ButtonView {
                label: RESET_LABEL,
                disabled: submitting,
            },
            result: (!state.result.is_empty()).then(|| state.result.clone()),
        }
    }
}
