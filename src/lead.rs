//! Lead capture flow: the one mutation on the site.
//!
//! An enquiry (`Lead`) is validated locally, then handed to an injected
//! [`LeadService`] exactly once. The service is a trait object so the form
//! can be driven against a fake in tests; the real site wires in
//! [`HttpLeadService`].

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;

use crate::config;

/// A prospective customer's enquiry, built from the form at submit time.
/// Never persisted locally.
#[derive(Clone, Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub book_requirement: String,
}

impl Lead {
    pub fn new(name: String, phone: String, book_requirement: String) -> Self {
        Self { name, phone, book_requirement }
    }

    /// All three fields non-empty after trimming. This is the only
    /// validation performed; phone format and lengths are deliberately
    /// unchecked to keep enquiry friction low.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.book_requirement.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    /// A required field was empty after trimming. No request was made.
    Validation,
    /// No service handle available. No request was made.
    NotConnected,
    /// The request was made and failed (network or server side).
    Remote(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation => write!(f, "please fill in all fields"),
            SubmitError::NotConnected => write!(f, "not connected"),
            SubmitError::Remote(msg) => write!(f, "submission failed: {}", msg),
        }
    }
}

/// Lifecycle of one submission attempt. Drives both the submit button's
/// disabled state and which notice is shown.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

pub type SubmitFuture = LocalBoxFuture<'static, Result<(), SubmitError>>;

/// The remote contact-capture service, seen only at its boundary.
pub trait LeadService {
    fn submit_form(&self, lead: &Lead) -> SubmitFuture;
}

/// Prop-friendly wrapper around an optional service handle. `None` models
/// the connection being absent, in which case submission fails fast.
#[derive(Clone)]
pub struct LeadServiceHandle(Option<Rc<dyn LeadService>>);

impl LeadServiceHandle {
    pub fn new(service: Rc<dyn LeadService>) -> Self {
        Self(Some(service))
    }

    pub fn disconnected() -> Self {
        Self(None)
    }
}

// Identity comparison is enough for Yew's change detection; the handle is
// created once at startup and never swapped.
impl PartialEq for LeadServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Submit one lead. Validation happens before the connection check, and
/// the service is invoked at most once, with the raw untrimmed values.
pub async fn submit_lead(service: &LeadServiceHandle, lead: &Lead) -> Result<(), SubmitError> {
    if !lead.is_complete() {
        return Err(SubmitError::Validation);
    }
    let service = service.0.as_ref().ok_or(SubmitError::NotConnected)?;
    service.submit_form(lead).await
}

#[derive(Serialize)]
struct LeadRequest {
    name: String,
    phone: String,
    book_requirement: String,
}

/// Production implementation: JSON POST to the lead API.
pub struct HttpLeadService;

impl LeadService for HttpLeadService {
    fn submit_form(&self, lead: &Lead) -> SubmitFuture {
        let payload = LeadRequest {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            book_requirement: lead.book_requirement.clone(),
        };
        Box::pin(async move {
            let request = Request::post(&format!("{}/api/leads", config::get_backend_url()))
                .header("Content-Type", "application/json")
                .json(&payload)
                .map_err(|e| SubmitError::Remote(e.to_string()))?;

            match request.send().await {
                Ok(response) if response.ok() => Ok(()),
                Ok(response) => Err(SubmitError::Remote(format!(
                    "server returned {}",
                    response.status()
                ))),
                Err(e) => Err(SubmitError::Remote(e.to_string())),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Records every lead it receives; fails while `failure` holds an error.
    #[derive(Default)]
    struct FakeService {
        calls: Cell<usize>,
        received: RefCell<Vec<Lead>>,
        failure: RefCell<Option<SubmitError>>,
    }

    impl LeadService for Rc<FakeService> {
        fn submit_form(&self, lead: &Lead) -> SubmitFuture {
            self.calls.set(self.calls.get() + 1);
            self.received.borrow_mut().push(lead.clone());
            let outcome = match self.failure.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            };
            Box::pin(async move { outcome })
        }
    }

    fn fake() -> (Rc<FakeService>, LeadServiceHandle) {
        let service = Rc::new(FakeService::default());
        let handle = LeadServiceHandle::new(Rc::new(service.clone()));
        (service, handle)
    }

    #[test]
    fn empty_field_blocks_submission_without_a_call() {
        let (service, handle) = fake();
        let lead = Lead::new(
            String::new(),
            "9876543210".into(),
            "NCERT Class 10".into(),
        );

        let result = block_on(submit_lead(&handle, &lead));

        assert_eq!(result, Err(SubmitError::Validation));
        assert_eq!(service.calls.get(), 0);
    }

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let (service, handle) = fake();
        for lead in [
            Lead::new("   ".into(), "9876543210".into(), "NCERT".into()),
            Lead::new("Rahul".into(), "\t".into(), "NCERT".into()),
            Lead::new("Rahul".into(), "9876543210".into(), " \n ".into()),
        ] {
            assert_eq!(
                block_on(submit_lead(&handle, &lead)),
                Err(SubmitError::Validation)
            );
        }
        assert_eq!(service.calls.get(), 0);
    }

    #[test]
    fn complete_lead_reaches_the_service_once_with_raw_values() {
        let (service, handle) = fake();
        // Untrimmed on purpose: the raw values go over the wire.
        let lead = Lead::new(
            " Rahul ".into(),
            "9876543210".into(),
            "NCERT Class 10".into(),
        );

        let result = block_on(submit_lead(&handle, &lead));

        assert_eq!(result, Ok(()));
        assert_eq!(service.calls.get(), 1);
        assert_eq!(service.received.borrow()[0], lead);
    }

    #[test]
    fn disconnected_handle_fails_fast() {
        let handle = LeadServiceHandle::disconnected();
        let lead = Lead::new(
            "Rahul".into(),
            "9876543210".into(),
            "NCERT Class 10".into(),
        );

        assert_eq!(
            block_on(submit_lead(&handle, &lead)),
            Err(SubmitError::NotConnected)
        );
    }

    #[test]
    fn validation_is_checked_before_the_connection() {
        let handle = LeadServiceHandle::disconnected();
        let lead = Lead::new(String::new(), String::new(), String::new());

        assert_eq!(
            block_on(submit_lead(&handle, &lead)),
            Err(SubmitError::Validation)
        );
    }

    #[test]
    fn remote_failure_is_surfaced_and_retry_makes_a_fresh_call() {
        let (service, handle) = fake();
        let lead = Lead::new(
            "Rahul".into(),
            "9876543210".into(),
            "NCERT Class 10".into(),
        );

        *service.failure.borrow_mut() =
            Some(SubmitError::Remote("network error".into()));
        let first = block_on(submit_lead(&handle, &lead));
        assert_eq!(first, Err(SubmitError::Remote("network error".into())));
        assert_eq!(service.calls.get(), 1);

        // The form keeps its values on failure, so a retry resubmits the
        // exact same lead and must trigger a new call.
        *service.failure.borrow_mut() = None;
        let second = block_on(submit_lead(&handle, &lead));
        assert_eq!(second, Ok(()));
        assert_eq!(service.calls.get(), 2);
        assert_eq!(service.received.borrow().as_slice(), &[lead.clone(), lead]);
    }

    #[test]
    fn wire_payload_carries_the_three_raw_fields() {
        let lead = Lead::new(
            " Rahul ".into(),
            "9876543210".into(),
            "NCERT Class 10".into(),
        );
        let payload = LeadRequest {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            book_requirement: lead.book_requirement.clone(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": " Rahul ",
                "phone": "9876543210",
                "book_requirement": "NCERT Class 10",
            })
        );
    }

    #[test]
    fn submit_state_gates_on_submitting_only() {
        assert!(SubmitState::Submitting.is_submitting());
        assert!(!SubmitState::Idle.is_submitting());
        assert!(!SubmitState::Succeeded.is_submitting());
        assert!(!SubmitState::Failed(SubmitError::Validation).is_submitting());
    }
}
