//! Titanic survival predictor page using Yew.
//! Holds the controller, wires its callbacks into the form and spawns requests.

use titanic_predictor::components::{FieldEdit, PredictorForm};
use titanic_predictor::{run_prediction, Controller, FormView, HttpPredictionClient};
use yew::prelude::*;

/// Root component: owns the controller and re-renders after each transition.
#[function_component]
pub fn App() -> Html {
    let controller = use_mut_ref(Controller::new);
    let client = use_memo((), |_| HttpPredictionClient::default());
    let trigger = use_force_update();

    let on_change = Callback::from(move |_: ()| trigger.force_update());

    let onedit = {
        let controller = controller.clone();
        let on_change = on_change.clone();
        Callback::from(move |(field, value): FieldEdit| {
            controller.borrow_mut().edit(field, value);
            on_change.emit(());
        })
    };

    let onpredict = {
        let controller = controller.clone();
        let client = client.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: ()| {
            let request = run_prediction(controller.clone(), client.clone(), on_change.clone());
            wasm_bindgen_futures::spawn_local(async move {
                // Failures are logged by the controller; the form stays submitting.
                let _ = request.await;
            });
        })
    };

    let onreset = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            controller.borrow_mut().reset();
            on_change.emit(());
        })
    };

    let view = FormView::from_state(controller.borrow().state());

    html! {
        <PredictorForm {view} {onedit} {onpredict} {onreset} />
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
