//! Contact submission stub contract.

use serde_json::json;
use tokio::time::Instant;

use vitrine_engine::submission::{SUBMISSION_DELAY, submit_contact};

#[tokio::test(start_paused = true)]
async fn echoes_the_submitted_record() {
    let form = json!({
        "name": "A recruiter",
        "email": "someone@example.com",
        "message": "Let's talk",
    });
    let receipt = submit_contact(form.clone()).await;
    assert!(receipt.success);
    assert_eq!(receipt.data, form);
    assert_eq!(
        receipt.message,
        "Thank you for your message. I'll get back to you soon!"
    );
}

#[tokio::test(start_paused = true)]
async fn simulates_a_one_second_round_trip() {
    let started = Instant::now();
    let _ = submit_contact(json!(null)).await;
    assert_eq!(started.elapsed(), SUBMISSION_DELAY);
}
