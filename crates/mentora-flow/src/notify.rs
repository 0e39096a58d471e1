//! Navigation and notification port.
//!
//! The original UI opens a browser tab on the tutee's Slack profile when
//! a conversation starts, and navigates to the history page after an
//! assignment. Neither belongs in an orchestrator that also runs
//! server-side, so both are behind the [`Navigator`] trait: the API
//! collects the link and returns it to the browser, the CLI prints it,
//! tests assert on it.

use parking_lot::Mutex;
use std::sync::Arc;

use mentora_core::SlackUserId;

/// Default Slack workspace for the mentorship program.
pub const DEFAULT_WORKSPACE: &str = "somos-pragma";

/// Default in-app path shown after a successful assignment.
pub const DEFAULT_HISTORY_PATH: &str = "/history";

/// Build the Slack member deep link for a tutee.
///
/// The member id is interpolated exactly as the backend returned it — no
/// escaping, no validation. A blank id yields a link ending in `/team/`,
/// which is broken but accepted behavior.
pub fn slack_team_link(workspace: &str, slack_id: &SlackUserId) -> String {
    format!("https://{workspace}.slack.com/team/{}", slack_id.as_str())
}

/// Capability to open external links and move within the app.
pub trait Navigator: Send + Sync {
    /// Open a URL in a new browser context (chat deep link).
    fn open_external(&self, url: &str);

    /// Navigate the app to an internal path (history page).
    fn navigate(&self, path: &str);
}

/// Navigator that only logs — for hosts with nowhere to navigate to.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn open_external(&self, url: &str) {
        tracing::info!(url, "would open external link");
    }

    fn navigate(&self, path: &str) {
        tracing::info!(path, "would navigate");
    }
}

/// Navigator that records what would have been opened.
///
/// Cheap to clone; clones share the same record. The API handler keeps a
/// handle, runs a flow, and returns whatever was collected to the
/// browser client, which performs the actual `window.open`.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    inner: Arc<Mutex<Records>>,
}

#[derive(Debug, Default)]
struct Records {
    opened: Vec<String>,
    navigations: Vec<String>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// External links opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.inner.lock().opened.clone()
    }

    /// In-app navigations performed so far, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.lock().navigations.clone()
    }

    /// The most recent external link, if any.
    pub fn last_opened(&self) -> Option<String> {
        self.inner.lock().opened.last().cloned()
    }

    /// The most recent in-app navigation, if any.
    pub fn last_navigation(&self) -> Option<String> {
        self.inner.lock().navigations.last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.inner.lock().opened.push(url.to_string());
    }

    fn navigate(&self, path: &str) {
        self.inner.lock().navigations.push(path.to_string());
    }
}
