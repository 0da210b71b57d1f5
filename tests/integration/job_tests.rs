//! End-to-end runs of the batch job

use crate::common::assertions::SendStateAssertions;
use crate::common::fixtures::MESSAGES_PATH;
use crate::common::{SheetFixture, TestEnv};
use crate::{assert_err, assert_ok};
use sheet_texter::message::promo_code;
use sheet_texter::{DispatchError, DryRunTransport, JobOptions, TextNowTransport, run_job};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn mixed_sheet() -> SheetFixture {
    SheetFixture::new()
        .row("t1", "Ann", "(555) 123-4567")
        .row("t2", "Bob", "123")
        .row_with_preference("t3", "Cy", "555-987-6543", "Email")
        .row_with_preference("t4", "", "1 555 222 3333", "Text")
}

#[tokio::test]
async fn test_first_run_records_every_outcome() {
    let env = TestEnv::start().await;
    env.serve_sheet(&mixed_sheet()).await;
    env.accept_messages(2).await;

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));
    let report = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);

    assert_eq!(report.total_rows, 4);
    assert_eq!(report.processed(), 2);
    assert_eq!(report.bad_phone, 1);
    assert_eq!(report.not_text_preference, 1);
    assert_eq!(report.to_string(), "Run complete. Newly processed: 2");

    let state = env.load_state().await;
    state.assert_sent("t1");
    state.assert_pending("t2");
    state.assert_sent("t3");
    state.assert_sent("t4");

    let ann = state.get("t1").unwrap();
    assert_eq!(ann.phone.as_deref(), Some("+15551234567"));
    assert_eq!(ann.code, Some(promo_code("ADP", "t1")));

    let bob = state.get("t2").unwrap();
    assert_eq!(bob.note.as_deref(), Some("bad phone"));
    assert_eq!(bob.raw.as_deref(), Some("123"));

    assert_eq!(
        state.get("t3").unwrap().note.as_deref(),
        Some("not text preference")
    );
    assert_eq!(state.get("t4").unwrap().phone.as_deref(), Some("+15552223333"));
}

#[tokio::test]
async fn test_message_body_reaches_textnow() {
    let env = TestEnv::start().await;
    env.serve_sheet(&SheetFixture::new().row("t1", "Ann", "(555) 123-4567"))
        .await;

    let expected = format!(
        "Hey Ann, this is A Dreamer Production. Your 10% off code is {}. \
         Show this at checkout to redeem. Reply STOP to opt out.",
        promo_code("ADP", "t1")
    );
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(body_partial_json(serde_json::json!({
            "contact_value": "+15551234567",
            "message": expected,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&env.textnow)
        .await;

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));
    let report = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);
    assert_eq!(report.processed(), 1);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let env = TestEnv::start().await;
    env.serve_sheet(&mixed_sheet()).await;
    // Both runs together must only send twice
    env.accept_messages(2).await;

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));

    let first = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);
    assert_eq!(first.processed(), 2);

    let second = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);
    assert_eq!(second.processed(), 0);
    assert_eq!(second.already_sent, 3);
    // The bad phone row is looked at again but still cannot be sent
    assert_eq!(second.bad_phone, 1);
}

#[tokio::test]
async fn test_failed_send_is_retried_on_next_run() {
    let env = TestEnv::start().await;
    env.serve_sheet(&SheetFixture::new().row("t1", "Ann", "5551234567"))
        .await;
    env.reject_messages(429, 1).await;
    env.accept_messages(1).await;

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));

    let first = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);
    assert_eq!(first.processed(), 0);
    assert_eq!(first.failed, 1);

    let state = env.load_state().await;
    state.assert_pending("t1");
    assert!(state.get("t1").unwrap().error.as_deref().unwrap().contains("429"));

    let second = assert_ok!(run_job(&config, &transport, JobOptions::default()).await);
    assert_eq!(second.processed(), 1);
    env.load_state().await.assert_sent("t1");
}

#[tokio::test]
async fn test_fetch_failure_leaves_state_untouched() {
    let env = TestEnv::start().await;
    env.fail_sheet(500).await;
    env.accept_messages(0).await;

    let existing = "{\n  \"t0\": {\n    \"sent\": false,\n    \"error\": \"old\"\n  }\n}";
    std::fs::write(env.state_path(), existing).unwrap();

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));
    let err = assert_err!(run_job(&config, &transport, JobOptions::default()).await);

    assert!(matches!(err, DispatchError::Fetch(_)));
    assert_eq!(std::fs::read_to_string(env.state_path()).unwrap(), existing);
}

#[tokio::test]
async fn test_fetch_failure_without_history_creates_no_file() {
    let env = TestEnv::start().await;
    env.fail_sheet(503).await;

    let config = env.config();
    let err = assert_err!(run_job(&config, &DryRunTransport::new(), JobOptions::default()).await);

    assert!(matches!(err, DispatchError::Fetch(_)));
    assert!(!env.state_path().exists());
}

#[tokio::test]
async fn test_dry_run_sends_nothing_and_writes_nothing() {
    let env = TestEnv::start().await;
    env.serve_sheet(&mixed_sheet()).await;
    env.accept_messages(0).await;

    let config = env.config();
    let report = assert_ok!(
        run_job(&config, &DryRunTransport::new(), JobOptions { dry_run: true }).await
    );

    assert_eq!(report.processed(), 2);
    assert!(!env.state_path().exists());
}

#[tokio::test]
async fn test_malformed_state_file_aborts_before_sending() {
    let env = TestEnv::start().await;
    env.serve_sheet(&mixed_sheet()).await;
    env.accept_messages(0).await;
    std::fs::write(env.state_path(), "not json").unwrap();

    let config = env.config();
    let transport = assert_ok!(TextNowTransport::connect(config.textnow()));
    let err = assert_err!(run_job(&config, &transport, JobOptions::default()).await);

    assert!(matches!(err, DispatchError::State(_)));
}
