use gloo::console::warn;
use gloo_net::http::{Request, Response};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::contact_endpoint;
use super::toast::{ToastHandle, ToastVariant};
use crate::contact::{check_status, ContactField, ContactForm, ContactInquiry, FormAction, SubmitError};

#[derive(Default, PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

async fn submit_inquiry(endpoint: &str, inquiry: &ContactInquiry) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(inquiry)
        .map_err(|err| SubmitError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))?;

    accept_response(response).await
}

/// A 2xx status with a JSON body counts as delivered; the body is not inspected.
async fn accept_response(response: Response) -> Result<(), SubmitError> {
    check_status(response.status())?;

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| SubmitError::InvalidResponse(err.to_string()))?;

    Ok(())
}

fn event_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }

    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

struct FieldLayout {
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
}

const FIELD_LAYOUTS: [FieldLayout; 4] = [
    FieldLayout {
        field: ContactField::Name,
        label: "Your Name",
        input_type: "text",
        placeholder: "John Doe",
        autocomplete: "name",
    },
    FieldLayout {
        field: ContactField::Email,
        label: "Work Email",
        input_type: "email",
        placeholder: "john@company.com",
        autocomplete: "email",
    },
    FieldLayout {
        field: ContactField::Company,
        label: "Company / Organization",
        input_type: "text",
        placeholder: "Acme Industries",
        autocomplete: "organization",
    },
    FieldLayout {
        field: ContactField::Message,
        label: "Project Description",
        input_type: "textarea",
        placeholder: "Briefly describe the component, constraints, and timeline…",
        autocomplete: "off",
    },
];

#[function_component(ContactFormPanel)]
pub fn contact_form_panel() -> Html {
    let form = use_reducer(FormState::default);
    let toasts = use_context::<ToastHandle>();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if form.0.pending {
                return;
            }

            let inquiry = match form.0.prepare_submission() {
                Ok(inquiry) => inquiry,
                Err(errors) => {
                    form.dispatch(FormAction::Invalid(errors));
                    return;
                }
            };

            form.dispatch(FormAction::Started);

            let dispatcher = form.dispatcher();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = submit_inquiry(&contact_endpoint(), &inquiry).await;

                match &result {
                    Ok(()) => {
                        if let Some(toasts) = toasts.as_ref() {
                            toasts.show(
                                "Transmission Received",
                                "Our engineering team will respond within 24 hours.",
                                ToastVariant::Default,
                            );
                        }
                    }
                    Err(err) => {
                        warn!(format!("contact submission failed: {}", err.detail()));
                        if let Some(toasts) = toasts.as_ref() {
                            toasts.show("Transmission Failed", err.to_string(), ToastVariant::Destructive);
                        }
                    }
                }

                dispatcher.dispatch(FormAction::Finished(result));
            });
        })
    };

    let pending = form.0.pending;

    html! {
        <form class="contact-form" novalidate="novalidate" {onsubmit}>
            { for FIELD_LAYOUTS.iter().map(|layout| {
                let field = layout.field;
                let id = format!("contact-{}", field.as_str());
                let error = form.0.errors.get(field);
                let error_id = format!("{id}-error");
                let oninput = {
                    let form = form.clone();
                    Callback::from(move |event: InputEvent| {
                        form.dispatch(FormAction::Edit(field, event_value(&event)));
                    })
                };
                let value = form.0.values.value(field).to_string();

                let control = if layout.input_type == "textarea" {
                    html! {
                        <textarea
                            id={id.clone()}
                            name={field.as_str()}
                            rows="6"
                            placeholder={layout.placeholder}
                            aria-invalid={error.is_some().to_string()}
                            aria-describedby={error.map(|_| error_id.clone())}
                            {value}
                            {oninput}
                        />
                    }
                } else {
                    html! {
                        <input
                            id={id.clone()}
                            name={field.as_str()}
                            type={layout.input_type}
                            placeholder={layout.placeholder}
                            autocomplete={layout.autocomplete}
                            aria-invalid={error.is_some().to_string()}
                            aria-describedby={error.map(|_| error_id.clone())}
                            {value}
                            {oninput}
                        />
                    }
                };

                html! {
                    <div class={classes!("form-field", error.map(|_| "has-error"))}>
                        <label for={id.clone()}>{layout.label}</label>
                        {control}
                        if let Some(message) = error {
                            <p id={error_id.clone()} class="field-error">{message}</p>
                        }
                    </div>
                }
            }) }
            <button class="button button-primary" type="submit" disabled={pending}>
                { if pending { "Sending…" } else { "Submit Inquiry" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Jo".to_string(),
            email: "jo@acme.com".to_string(),
            company: String::new(),
            message: "Need a fixture for a 5-axis setup.".to_string(),
        }
    }

    #[wasm_bindgen_test(async)]
    async fn json_success_body_is_accepted() {
        let response = Response::builder()
            .status(200)
            .json(&serde_json::json!({ "success": true }))
            .expect("json response");

        assert_eq!(accept_response(response).await, Ok(()));
    }

    #[wasm_bindgen_test(async)]
    async fn error_status_is_rejected_before_reading_the_body() {
        let response = Response::builder()
            .status(502)
            .json(&serde_json::json!({ "message": "Failed to submit inquiry" }))
            .expect("json response");

        assert_eq!(
            accept_response(response).await,
            Err(SubmitError::Rejected { status: 502 })
        );
    }

    #[wasm_bindgen_test(async)]
    async fn success_status_without_json_is_an_invalid_response() {
        let response = Response::builder()
            .status(200)
            .body(Some("thanks!"))
            .expect("text response");

        let result = accept_response(response).await;

        assert!(matches!(result, Err(SubmitError::InvalidResponse(_))));
        assert_eq!(
            result.map_err(|err| err.to_string()),
            Err("Failed to submit inquiry".to_string())
        );
    }

    #[wasm_bindgen_test(async)]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let result = submit_inquiry("http://127.0.0.1:9/api/contact", &inquiry()).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
