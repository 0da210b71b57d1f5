//! Test fixtures
//!
//! Real servers (wiremock) and a real state file in a temp directory.

use sheet_texter::config::{JobConfig, PacingConfig, SheetConfig, StateConfig, TextNowConfig};
use sheet_texter::{Config, SendState, StateStore};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SHEET_PATH: &str = "/sheet/export";
pub const MESSAGES_PATH: &str = "/api/users/dreamer/messages";

/// Builder for a CSV export
pub struct SheetFixture {
    lines: Vec<String>,
}

impl SheetFixture {
    pub fn new() -> Self {
        Self {
            lines: vec!["Timestamp,Name,Phone,Preferred Communication".to_string()],
        }
    }

    /// Add a row with no stated preference
    pub fn row(self, timestamp: &str, name: &str, phone: &str) -> Self {
        self.row_with_preference(timestamp, name, phone, "")
    }

    pub fn row_with_preference(
        mut self,
        timestamp: &str,
        name: &str,
        phone: &str,
        preference: &str,
    ) -> Self {
        self.lines.push(format!(
            "{},{},\"{}\",{}",
            timestamp, name, phone, preference
        ));
        self
    }

    pub fn csv(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for SheetFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock sheet and TextNow servers plus a scratch directory for state
pub struct TestEnv {
    pub sheet: MockServer,
    pub textnow: MockServer,
    pub dir: TempDir,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            sheet: MockServer::start().await,
            textnow: MockServer::start().await,
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("sent_state.json")
    }

    pub fn config(&self) -> Config {
        Config {
            job: JobConfig {
                sheet: SheetConfig {
                    csv_url: format!("{}{}", self.sheet.uri(), SHEET_PATH),
                    timeout_secs: 5,
                },
                textnow: TextNowConfig {
                    username: "dreamer".to_string(),
                    sid_cookie: "s%3Atest-session".to_string(),
                    api_base: self.textnow.uri(),
                },
                state: StateConfig {
                    path: self.state_path().to_string_lossy().into_owned(),
                },
                pacing: PacingConfig::none(),
                ..Default::default()
            },
        }
    }

    /// Serve `fixture` as the sheet export
    pub async fn serve_sheet(&self, fixture: &SheetFixture) {
        Mock::given(method("GET"))
            .and(path(SHEET_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/csv; charset=utf-8")
                    .set_body_string(fixture.csv()),
            )
            .mount(&self.sheet)
            .await;
    }

    /// Make the sheet export fail with `status`
    pub async fn fail_sheet(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(SHEET_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.sheet)
            .await;
    }

    /// Accept every message, expecting exactly `count` of them
    pub async fn accept_messages(&self, count: u64) {
        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(count)
            .mount(&self.textnow)
            .await;
    }

    /// Reject the next `count` messages with `status`
    pub async fn reject_messages(&self, status: u16, count: u64) {
        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("rate limited"))
            .up_to_n_times(count)
            .expect(count)
            .mount(&self.textnow)
            .await;
    }

    pub async fn load_state(&self) -> SendState {
        StateStore::new(self.state_path())
            .load()
            .await
            .expect("state file should load")
    }
}
