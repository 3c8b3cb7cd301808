//! Predictor form controller.
//!
//! Owns the [`ViewState`] and applies the three stimuli the page produces:
//! field edits, predict clicks and reset clicks. The request lifecycle is
//!
//! ```text
//! Idle --predict--> Submitting --response--> Idle
//! ```
//!
//! with `reset` clearing the displayed result independently of it. A failed
//! request leaves the controller in `Submitting`; nothing moves it back.

use crate::client::{PredictError, PredictionClient};
use crate::{Field, FieldValue, FormData, PredictionResponse, RequestState, ViewState};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Store a raw control value for `field`. No parsing or validation.
    pub fn edit(&mut self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        debug!("edit {} = {}", field.key(), value);
        self.state.form.set(field, value);
    }

    /// Enter `Submitting` and hand back the snapshot to send.
    ///
    /// Returns `None` while a request is already outstanding.
    pub fn begin_predict(&mut self) -> Option<FormData> {
        if self.state.request.is_submitting() {
            debug!("predict ignored, request already in flight");
            return None;
        }
        self.state.request = RequestState::Submitting;
        Some(self.state.form.clone())
    }

    pub fn complete_predict(&mut self, response: PredictionResponse) {
        if let Some(status) = &response.status {
            debug!("prediction status: {}", status);
        }
        self.state.result = response.result;
        self.state.request = RequestState::Idle;
    }

    /// Clear the displayed result. Form values and request state are kept.
    pub fn reset(&mut self) {
        info!("prediction result cleared");
        self.state.result.clear();
    }
}

/// Drive one predict click to completion.
///
/// `on_change` fires after every state transition so the page can re-render.
/// On failure the error is logged and returned, and the controller stays in
/// `Submitting`.
pub async fn run_prediction<C>(
    controller: Rc<RefCell<Controller>>,
    client: Rc<C>,
    on_change: Callback<()>,
) -> Result<(), PredictError>
where
    C: PredictionClient + ?Sized,
{
    let Some(snapshot) = controller.borrow_mut().begin_predict() else {
        return Ok(());
    };
    on_change.emit(());

    info!("submitting prediction request");
    // No borrow is held across the await: edits and resets stay live.
    match client.submit(snapshot).await {
        Ok(response) => {
            info!("prediction received: {}", response.result);
            controller.borrow_mut().complete_predict(response);
            on_change.emit(());
            Ok(())
        }
        Err(e) => {
            warn!("prediction failed, form stays in submitting state: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PredictFuture;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use futures::FutureExt;
    use serde_json::json;
    use std::cell::Cell;

    /// Answers every request with a fixed response body, decoded the way the
    /// HTTP client decodes it, and records every snapshot.
    struct StubClient {
        body: String,
        sent: RefCell<Vec<FormData>>,
    }

    impl StubClient {
        fn replying(body: impl Into<String>) -> Self {
            Self {
                body: body.into(),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn ok(result: &str) -> Self {
            Self::replying(json!({"statusCode": 200, "result": result}).to_string())
        }
    }

    impl PredictionClient for StubClient {
        fn submit(&self, data: FormData) -> PredictFuture {
            self.sent.borrow_mut().push(data);
            let body = self.body.clone();
            async move {
                let response: PredictionResponse = serde_json::from_str(&body)?;
                Ok::<_, PredictError>(response)
            }
            .boxed_local()
        }
    }

    /// Holds each request until the test releases it.
    #[derive(Default)]
    struct DeferredClient {
        sent: RefCell<Vec<FormData>>,
        pending: RefCell<Vec<oneshot::Sender<PredictionResponse>>>,
    }

    impl DeferredClient {
        fn release(&self, result: &str) {
            let tx = self.pending.borrow_mut().remove(0);
            let _ = tx.send(PredictionResponse {
                result: result.to_string(),
                status: Some("Prediction made".to_string()),
            });
        }
    }

    impl PredictionClient for DeferredClient {
        fn submit(&self, data: FormData) -> PredictFuture {
            self.sent.borrow_mut().push(data);
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push(tx);
            async move {
                match rx.await {
                    Ok(response) => Ok(response),
                    // An unreleased request never completes.
                    Err(_) => futures::future::pending().await,
                }
            }
            .boxed_local()
        }
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        (Callback::from(move |_| counter.set(counter.get() + 1)), count)
    }

    #[test]
    fn starts_with_defaults() {
        let controller = Controller::new();
        assert_eq!(controller.state(), &ViewState::default());
        assert_eq!(controller.state().form.age, FieldValue::Number(0));
        assert_eq!(controller.state().form.gender, FieldValue::from("male"));
        assert_eq!(controller.state().form.p_class, FieldValue::Number(1));
    }

    #[test]
    fn edit_changes_only_the_named_field() {
        for field in Field::ALL {
            let mut controller = Controller::new();
            let before = controller.state().form.clone();
            controller.edit(field, "7");

            for other in Field::ALL {
                if other == field {
                    assert_eq!(controller.state().form.get(other), &FieldValue::from("7"));
                } else {
                    assert_eq!(controller.state().form.get(other), before.get(other));
                }
            }
        }
    }

    #[test]
    fn edit_keeps_input_verbatim() {
        let mut controller = Controller::new();
        controller.edit(Field::Age, "thirty");
        assert_eq!(controller.state().form.age, FieldValue::from("thirty"));
    }

    #[test]
    fn begin_predict_refuses_while_submitting() {
        let mut controller = Controller::new();
        assert!(controller.begin_predict().is_some());
        assert_eq!(controller.state().request, RequestState::Submitting);
        assert!(controller.begin_predict().is_none());
    }

    #[test]
    fn reset_clears_only_the_result() {
        let mut controller = Controller::new();
        controller.edit(Field::Sibs, "2");
        controller.begin_predict();
        controller.complete_predict(PredictionResponse {
            result: "Survived".to_string(),
            status: None,
        });
        controller.begin_predict();

        controller.reset();
        assert_eq!(controller.state().result, "");
        assert_eq!(controller.state().request, RequestState::Submitting);
        assert_eq!(controller.state().form.sibs, FieldValue::from("2"));
    }

    #[test]
    fn successful_prediction_sets_result_and_returns_to_idle() {
        let controller = Rc::new(RefCell::new(Controller::new()));
        {
            let mut c = controller.borrow_mut();
            c.edit(Field::Age, "30");
            c.edit(Field::Gender, "female");
            c.edit(Field::PassengerClass, "2");
            c.edit(Field::Parch, "1");
            c.edit(Field::Sibs, "0");
        }
        let client = Rc::new(StubClient::ok("Survived"));
        let (on_change, renders) = counting_callback();

        block_on(run_prediction(controller.clone(), client.clone(), on_change)).unwrap();

        let c = controller.borrow();
        assert_eq!(c.state().result, "Survived");
        assert_eq!(c.state().request, RequestState::Idle);
        assert_eq!(renders.get(), 2);
        assert_eq!(client.sent.borrow().len(), 1);
        assert_eq!(client.sent.borrow()[0].gender, FieldValue::from("female"));
    }

    #[test]
    fn second_predict_while_submitting_sends_nothing() {
        let controller = Rc::new(RefCell::new(Controller::new()));
        let client = Rc::new(DeferredClient::default());
        let (on_change, _) = counting_callback();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let first = run_prediction(controller.clone(), client.clone(), on_change.clone());
        spawner.spawn_local(first.map(|_| ())).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().state().request, RequestState::Submitting);

        block_on(run_prediction(controller.clone(), client.clone(), on_change)).unwrap();
        assert_eq!(client.sent.borrow().len(), 1);

        client.release("Died");
        pool.run_until_stalled();
        assert_eq!(controller.borrow().state().result, "Died");
        assert_eq!(controller.borrow().state().request, RequestState::Idle);
    }

    #[test]
    fn reset_during_flight_is_overwritten_by_late_response() {
        let controller = Rc::new(RefCell::new(Controller::new()));
        let client = Rc::new(DeferredClient::default());
        let (on_change, _) = counting_callback();
        let mut pool = LocalPool::new();

        pool.spawner()
            .spawn_local(run_prediction(controller.clone(), client.clone(), on_change).map(|_| ()))
            .unwrap();
        pool.run_until_stalled();

        // Edits after submission do not reach the in-flight request.
        controller.borrow_mut().edit(Field::Age, "55");
        controller.borrow_mut().reset();
        assert_eq!(controller.borrow().state().result, "");
        assert_eq!(controller.borrow().state().request, RequestState::Submitting);

        client.release("Survived");
        pool.run_until_stalled();

        let c = controller.borrow();
        assert_eq!(c.state().result, "Survived");
        assert_eq!(c.state().request, RequestState::Idle);
        assert_eq!(client.sent.borrow()[0].age, FieldValue::Number(0));
        assert_eq!(c.state().form.age, FieldValue::from("55"));
    }

    #[test]
    fn unparseable_reply_leaves_controller_submitting() {
        let controller = Rc::new(RefCell::new(Controller::new()));
        let client = Rc::new(StubClient::replying("<html>Bad Gateway</html>"));
        let (on_change, renders) = counting_callback();

        let outcome = block_on(run_prediction(
            controller.clone(),
            client.clone(),
            on_change.clone(),
        ));
        assert!(matches!(outcome, Err(PredictError::Decode(_))));
        assert_eq!(controller.borrow().state().request, RequestState::Submitting);
        assert_eq!(controller.borrow().state().result, "");
        assert_eq!(renders.get(), 1);

        // Stuck: further clicks are ignored.
        block_on(run_prediction(controller.clone(), client.clone(), on_change)).unwrap();
        assert_eq!(client.sent.borrow().len(), 1);
    }

    #[test]
    fn service_error_reply_returns_to_idle_with_empty_result() {
        let controller = Rc::new(RefCell::new(Controller::new()));
        controller.borrow_mut().begin_predict();
        controller.borrow_mut().complete_predict(PredictionResponse {
            result: "Survived".to_string(),
            status: None,
        });
        let error_reply = json!({
            "statusCode": 500,
            "status": "Could not make prediction",
            "error": "unknown class",
        });
        let client = Rc::new(StubClient::replying(error_reply.to_string()));
        let (on_change, renders) = counting_callback();

        block_on(run_prediction(controller.clone(), client, on_change)).unwrap();

        let c = controller.borrow();
        assert_eq!(c.state().request, RequestState::Idle);
        assert_eq!(c.state().result, "");
        assert_eq!(renders.get(), 2);
    }
}
