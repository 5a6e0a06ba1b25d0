//! Contact submission stub.
//!
//! The page links out for contact instead of hosting a form, so nothing in
//! the UI calls this. The contract is kept for the day a form returns: the
//! submission waits one second and resolves with a fixed success envelope
//! echoing its input.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// Simulated round-trip delay.
pub const SUBMISSION_DELAY: Duration = Duration::from_secs(1);

const SUBMISSION_MESSAGE: &str = "Thank you for your message. I'll get back to you soon!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    /// The submitted form data, echoed back unchanged.
    pub data: Value,
}

/// Submit a contact form record.
pub async fn submit_contact(form: Value) -> SubmissionReceipt {
    tokio::time::sleep(SUBMISSION_DELAY).await;
    SubmissionReceipt {
        success: true,
        message: SUBMISSION_MESSAGE.to_string(),
        data: form,
    }
}
