//! Yew view components for the predictor page.
//!
//! Everything here renders from a [`FormView`] and reports user actions
//! through callbacks; no component holds state of its own.

use crate::config::PAGE_TITLE;
use crate::fields::{Field, FieldKind};
use crate::view::{ButtonView, ControlView, FormView};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A field edit: which control changed and its raw value.
pub type FieldEdit = (Field, String);

/// Tag raw control values with the control's fixed field.
fn field_edit_callback(onedit: &Callback<FieldEdit>, field: Field) -> Callback<String> {
    onedit.reform(move |value: String| (field, value))
}

#[derive(Properties, PartialEq)]
pub struct FieldControlProps {
    pub control: ControlView,
    pub onedit: Callback<FieldEdit>,
}

/// One labelled control. Numeric fields are text inputs, enumerated ones
/// are selects; either way the value is forwarded untouched.
#[function_component(FieldControl)]
pub fn field_control(props: &FieldControlProps) -> Html {
    let descriptor = props.control.descriptor;
    let field = descriptor.field;
    let value = props.control.value.clone();
    let edit = field_edit_callback(&props.onedit, field);

    let control = match descriptor.kind {
        FieldKind::Numeric { placeholder } => {
            let oninput = edit.reform(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                input.value()
            });
            html! {
                <input type="text"
                    inputmode="numeric"
                    class="form-control"
                    id={field.key()}
                    name={field.key()}
                    placeholder={placeholder}
                    value={value}
                    {oninput}
                />
            }
        }
        FieldKind::Enumerated { options } => {
            let onchange = edit.reform(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                select.value()
            });
            html! {
                <select class="form-control" id={field.key()} name={field.key()} {onchange}>
                    { options.iter().map(|&opt| html! {
                        <option value={opt} selected={opt == value}>{ opt }</option>
                    }).collect::<Html>() }
                </select>
            }
        }
    };

    html! {
        <div class="form-group col">
            <label for={field.key()}>{ descriptor.label }</label>
            { control }
        </div>
    }
}

/// Disabled buttons get no click handler at all.
fn button_onclick(button: &ButtonView, action: &Callback<()>) -> Option<Callback<MouseEvent>> {
    (!button.disabled).then(|| action.reform(|_| ()))
}

fn render_button(button: &ButtonView, class: &'static str, action: &Callback<()>) -> Html {
    html! {
        <button type="button"
            class={classes!("btn", "btn-block", class)}
            disabled={button.disabled}
            onclick={button_onclick(button, action)}
        >
            { button.label }
        </button>
    }
}

/// Result region; renders nothing when there is no result.
pub fn render_result(result: Option<&str>) -> Html {
    match result {
        Some(text) => html! {
            <div class="row">
                <div class="col result-container">
                    <h5 id="result">{ text }</h5>
                </div>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct PredictorFormProps {
    pub view: FormView,
    pub onedit: Callback<FieldEdit>,
    pub onpredict: Callback<()>,
    pub onreset: Callback<()>,
}

#[function_component(PredictorForm)]
pub fn predictor_form(props: &PredictorFormProps) -> Html {
    let view = &props.view;

    html! {
        <div class="container">
            <div>
                <h1 class="title">{ PAGE_TITLE }</h1>
            </div>
            <div class="content">
                <form>
                    { view.rows.iter().map(|row| html! {
                        <div class="form-row">
                            { row.iter().map(|control| html! {
                                <FieldControl
                                    key={control.descriptor.field.key()}
                                    control={control.clone()}
                                    onedit={props.onedit.clone()}
                                />
                            }).collect::<Html>() }
                        </div>
                    }).collect::<Html>() }
                    <div class="row">
                        <div class="col">
                            { render_button(&view.predict, "btn-success", &props.onpredict) }
                        </div>
                        <div class="col">
                            { render_button(&view.reset, "btn-danger", &props.onreset) }
                        </div>
                    </div>
                </form>
                { render_result(view.result.as_deref()) }
            </div>
        </div>
    }
}
