//! Contact inquiry payload, validation, and the inquiry form state machine.
//!
//! Both the browser form and the `/api/contact` handler validate with
//! [`ContactInquiry::validate`], so a request that passes one passes the other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit inquiry";

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;
const NAME_ERROR: &str = "Name is required";
const EMAIL_ERROR: &str = "Invalid email address";
const MESSAGE_ERROR: &str = "Please provide more details";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Field errors in form order. At most one entry per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn first(&self) -> Option<FieldError> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn set(&mut self, field: ContactField, message: Option<&'static str>) {
        self.0.retain(|error| error.field != field);

        if let Some(message) = message {
            self.0.push(FieldError { field, message });
            self.0.sort_by_key(|error| {
                ContactField::ALL
                    .iter()
                    .position(|candidate| *candidate == error.field)
            });
        }
    }
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        for field in ContactField::ALL {
            errors.set(field, self.field_error(field));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn field_error(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => {
                (self.name.chars().count() < NAME_MIN_CHARS).then_some(NAME_ERROR)
            }
            ContactField::Email => (!is_valid_email(&self.email)).then_some(EMAIL_ERROR),
            ContactField::Company => None,
            ContactField::Message => {
                (self.message.chars().count() < MESSAGE_MIN_CHARS).then_some(MESSAGE_ERROR)
            }
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };

    if local.starts_with('.') || local.contains("..") || matches!(last, '.' | '\'') {
        return false;
    }

    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    hosts.iter().all(|label| {
        label
            .chars()
            .next()
            .is_some_and(|first| first.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Failed to submit inquiry")]
    Rejected { status: u16 },
    #[error("Failed to submit inquiry")]
    Transport(String),
    #[error("Failed to submit inquiry")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Diagnostic text for logs; never shown to the visitor.
    pub fn detail(&self) -> String {
        match self {
            Self::Rejected { status } => format!("endpoint responded with status {status}"),
            Self::Transport(reason) => format!("request failed: {reason}"),
            Self::InvalidResponse(reason) => format!("response body was not JSON: {reason}"),
        }
    }
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Endpoint for browser submissions; `raw` is the build-time override.
pub fn resolve_endpoint(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CONTACT_ENDPOINT)
        .to_string()
}

/// Body of a successful `/api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Body of a rejected `/api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRejection {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ContactRejection {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            field: None,
        }
    }

    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        match errors.first() {
            Some(error) => Self {
                message: error.message.to_string(),
                field: Some(error.field.as_str().to_string()),
            },
            None => Self::new("Invalid request body"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(ContactField, String),
    Invalid(FieldErrors),
    Started,
    Finished(Result<(), SubmitError>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub values: ContactInquiry,
    pub errors: FieldErrors,
    pub pending: bool,
    attempted: bool,
}

impl ContactForm {
    /// The payload to send, or the errors to show instead of sending.
    pub fn prepare_submission(&self) -> Result<ContactInquiry, FieldErrors> {
        self.values.validate()?;
        Ok(self.values.clone())
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => {
                *self.values.value_mut(field) = value;
                if self.attempted {
                    let error = self.values.field_error(field);
                    self.errors.set(field, error);
                }
            }
            FormAction::Invalid(errors) => {
                self.attempted = true;
                self.errors = errors;
            }
            FormAction::Started => {
                self.attempted = true;
                self.pending = true;
                self.errors = FieldErrors::default();
            }
            FormAction::Finished(Ok(())) => {
                *self = Self::default();
            }
            FormAction::Finished(Err(_)) => {
                self.pending = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            company: String::new(),
            message: "1234567890".to_string(),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        let inquiry = ContactInquiry {
            company: "Acme Industries".to_string(),
            ..valid_inquiry()
        };
        for field in ContactField::ALL {
            form.apply(FormAction::Edit(field, inquiry.value(field).to_string()));
        }
        form
    }

    #[test]
    fn minimal_inquiry_passes_validation() {
        assert_eq!(valid_inquiry().validate(), Ok(()));
    }

    #[test]
    fn short_name_and_message_fail_validation() {
        let short_name = ContactInquiry {
            name: "J".to_string(),
            ..valid_inquiry()
        };
        let errors = short_name.validate().expect_err("one character name");
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Message), None);

        let short_message = ContactInquiry {
            message: "short".to_string(),
            ..valid_inquiry()
        };
        let errors = short_message.validate().expect_err("five character message");
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Please provide more details")
        );
    }

    #[test]
    fn errors_are_reported_in_form_order() {
        let errors = ContactInquiry::default()
            .validate()
            .expect_err("empty inquiry");

        let fields: Vec<ContactField> = errors.iter().map(|error| error.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(
            ContactRejection::from_field_errors(&errors),
            ContactRejection {
                message: "Name is required".to_string(),
                field: Some("name".to_string()),
            }
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let inquiry = ContactInquiry {
            name: "é".to_string(),
            message: "ünïcödé ✓✓".to_string(),
            ..valid_inquiry()
        };

        let errors = inquiry.validate().expect_err("single character name");
        assert!(errors.get(ContactField::Name).is_some());
        assert!(errors.get(ContactField::Message).is_none());
    }

    #[test]
    fn email_validation_accepts_common_addresses() {
        for email in [
            "a@b.com",
            "first.last@example.co.in",
            "o'neil+quotes@mail-host.example.org",
            "dev_ops-1@sub.domain.io",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            "user@exa_mple.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn invalid_form_yields_errors_instead_of_payload() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(ContactField::Message, "short".to_string()));

        let errors = form.prepare_submission().expect_err("message too short");
        form.apply(FormAction::Invalid(errors));

        assert!(!form.pending);
        assert_eq!(
            form.errors.get(ContactField::Message),
            Some("Please provide more details")
        );
    }

    #[test]
    fn edits_revalidate_only_after_an_attempt() {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(ContactField::Name, "J".to_string()));
        assert!(form.errors.is_empty());

        let errors = form.prepare_submission().expect_err("empty form");
        form.apply(FormAction::Invalid(errors));
        assert_eq!(form.errors.get(ContactField::Name), Some("Name is required"));

        form.apply(FormAction::Edit(ContactField::Name, "Jo".to_string()));
        assert_eq!(form.errors.get(ContactField::Name), None);
        assert!(form.errors.get(ContactField::Email).is_some());
    }

    #[test]
    fn successful_submission_clears_the_form() {
        let mut form = filled_form();
        let payload = form.prepare_submission().expect("valid form");
        assert_eq!(payload.company, "Acme Industries");

        form.apply(FormAction::Started);
        assert!(form.pending);

        form.apply(FormAction::Finished(Ok(())));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failed_submission_keeps_the_values() {
        let mut form = filled_form();
        let before = form.values.clone();

        form.apply(FormAction::Started);
        form.apply(FormAction::Finished(check_status(500)));

        assert!(!form.pending);
        assert_eq!(form.values, before);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn edits_during_a_pending_submission_survive_failure() {
        let mut form = filled_form();
        form.apply(FormAction::Started);
        form.apply(FormAction::Edit(
            ContactField::Company,
            "Acme Tooling".to_string(),
        ));
        form.apply(FormAction::Finished(Err(SubmitError::Transport(
            "offline".to_string(),
        ))));

        assert_eq!(form.values.company, "Acme Tooling");
    }

    #[test]
    fn status_check_accepts_only_success_codes() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Rejected { status: 302 }));
        assert_eq!(check_status(422), Err(SubmitError::Rejected { status: 422 }));

        let error = check_status(503).expect_err("server error");
        assert_eq!(error.to_string(), SUBMIT_FAILED_MESSAGE);
        assert_eq!(error.detail(), "endpoint responded with status 503");
    }

    #[test]
    fn endpoint_override_is_trimmed_and_optional() {
        assert_eq!(resolve_endpoint(None), "/api/contact");
        assert_eq!(resolve_endpoint(Some("   ")), "/api/contact");
        assert_eq!(
            resolve_endpoint(Some(" https://forms.example.com/f/abc ")),
            "https://forms.example.com/f/abc"
        );
    }

    #[test]
    fn inquiry_json_has_exactly_four_fields() {
        let value = serde_json::to_value(valid_inquiry()).expect("serializable");
        let object = value.as_object().expect("json object");

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["company", "email", "message", "name"]);

        let without_company: ContactInquiry = serde_json::from_str(
            r#"{"name":"Jo","email":"a@b.com","message":"1234567890"}"#,
        )
        .expect("company is optional");
        assert_eq!(without_company, valid_inquiry());
    }
}
