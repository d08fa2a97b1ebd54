//! Career tip generation.
//!
//! A page change asks an [`InsightProvider`] for a short tip about the page's
//! [`Topic`]. [`InsightFetcher`] never fails from the caller's point of view:
//! every provider error or blank answer is replaced by a fixed fallback.
//! [`InsightTracker`] holds the displayed text and drops answers that arrive
//! for a request older than the most recently started one; [`start_request`]
//! ties one request to the tracker wherever it is stored.

mod config;
#[cfg(any(feature = "ssr", test))]
mod gemini;

pub use config::InsightConfig;
#[cfg(feature = "ssr")]
pub use gemini::GeminiProvider;

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

use crate::nav::Topic;
use crate::portfolio::PROFILE;

pub const DEFAULT_INSIGHT: &str = "Empowering the digital future through code.";
/// Used when the provider answers with nothing but whitespace.
pub const EMPTY_FALLBACK: &str = "Stay curious and never stop learning new technologies.";
/// Used when the provider cannot be reached or rejects the request.
pub const ERROR_FALLBACK: &str =
    "Focus on building a strong foundation in data structures and algorithms.";

pub const WORD_LIMIT: usize = 20;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsightError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightPrompt {
    pub topic: Topic,
    pub text: String,
    pub temperature: f32,
}

impl InsightPrompt {
    pub fn new(topic: Topic, owner: &str, temperature: f32) -> Self {
        let text = format!(
            "You are a professional career coach. Provide a single, inspiring, and practical \
             career tip specifically about {topic} for a Computer Science Engineer named \
             {owner}. Keep it under {WORD_LIMIT} words."
        );
        Self {
            topic,
            text,
            temperature,
        }
    }
}

/// A remote text generator. Implementations report every failure as an
/// [`InsightError`]; they do not substitute fallbacks themselves.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(&self, prompt: &InsightPrompt) -> Result<String, InsightError>;
}

pub struct InsightFetcher<P> {
    provider: P,
    owner: &'static str,
    temperature: f32,
}

impl<P: InsightProvider> InsightFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            owner: PROFILE.name,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn prompt_for(&self, topic: Topic) -> InsightPrompt {
        InsightPrompt::new(topic, self.owner, self.temperature)
    }

    pub async fn fetch(&self, topic: Topic) -> String {
        let prompt = self.prompt_for(topic);
        settle(topic, self.provider.generate(&prompt).await)
    }
}

/// Collapses a provider result into display text. Never returns an empty string.
pub fn settle(topic: Topic, result: Result<String, InsightError>) -> String {
    match result {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                log::warn!("empty insight for '{topic}', using fallback");
                EMPTY_FALLBACK.to_string()
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            log::warn!("insight unavailable for '{topic}': {e}");
            ERROR_FALLBACK.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct InsightTracker {
    issued: u64,
    text: String,
}

impl Default for InsightTracker {
    fn default() -> Self {
        Self {
            issued: 0,
            text: DEFAULT_INSIGHT.to_string(),
        }
    }
}

impl InsightTracker {
    /// Starts a new request. Every token handed out before this one is stale.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Stores `text` if `token` is the latest request and `text` is not blank.
    pub fn resolve(&mut self, token: RequestToken, text: String) -> bool {
        if !self.is_pending(token) {
            log::debug!("dropping stale insight #{} (latest #{})", token.0, self.issued);
            return false;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.text = trimmed.to_string();
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `token` still belongs to the most recently started request.
    pub fn is_pending(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

/// Shared storage for an [`InsightTracker`]; a reactive signal in the browser.
pub trait TrackerCell {
    /// Runs `f` on the tracker, or returns `None` once the tracker is gone.
    fn with_tracker<U>(&self, f: impl FnOnce(&mut InsightTracker) -> U) -> Option<U>;
}

/// Begins a request on `cell` right away and returns the future that awaits
/// `request` and hands its answer to the tracker. That future yields `true`
/// when the answer became the displayed text.
pub fn start_request<C, Fut>(cell: C, request: Fut) -> Option<impl Future<Output = bool>>
where
    C: TrackerCell,
    Fut: Future<Output = String>,
{
    let token = cell.with_tracker(|tracker| tracker.begin())?;
    Some(async move {
        let text = request.await;
        cell.with_tracker(|tracker| tracker.resolve(token, text))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use tokio::sync::oneshot;

    use super::*;
    use crate::nav::Page;

    impl TrackerCell for Arc<Mutex<InsightTracker>> {
        fn with_tracker<U>(&self, f: impl FnOnce(&mut InsightTracker) -> U) -> Option<U> {
            self.lock().ok().map(|mut tracker| f(&mut tracker))
        }
    }

    /// Stands in for a signal whose owner has been disposed.
    struct Disposed;

    impl TrackerCell for Disposed {
        fn with_tracker<U>(&self, _f: impl FnOnce(&mut InsightTracker) -> U) -> Option<U> {
            None
        }
    }

    struct StaticProvider(Result<String, InsightError>);

    #[async_trait]
    impl InsightProvider for StaticProvider {
        async fn generate(&self, _prompt: &InsightPrompt) -> Result<String, InsightError> {
            self.0.clone()
        }
    }

    /// Answers each topic only once the test sends its text through the gate.
    #[derive(Default)]
    struct GatedProvider {
        gates: Mutex<HashMap<Topic, oneshot::Receiver<String>>>,
        seen: Mutex<Vec<InsightPrompt>>,
    }

    impl GatedProvider {
        fn gate(&self, topic: Topic) -> oneshot::Sender<String> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(topic, rx);
            tx
        }
    }

    #[async_trait]
    impl InsightProvider for GatedProvider {
        async fn generate(&self, prompt: &InsightPrompt) -> Result<String, InsightError> {
            self.seen.lock().unwrap().push(prompt.clone());
            let rx = self
                .gates
                .lock()
                .unwrap()
                .remove(&prompt.topic)
                .ok_or_else(|| InsightError::Transport("no gate".to_string()))?;
            rx.await
                .map_err(|_| InsightError::Transport("gate dropped".to_string()))
        }
    }

    #[tokio::test]
    async fn test_provider_error_returns_fallback() {
        let errors = [
            InsightError::MissingCredential,
            InsightError::Timeout,
            InsightError::Transport("connection reset".to_string()),
            InsightError::Provider {
                status: 503,
                message: "overloaded".to_string(),
            },
            InsightError::Malformed("no candidates".to_string()),
        ];
        for err in errors {
            let fetcher = InsightFetcher::new(StaticProvider(Err(err)));
            let text = fetcher.fetch(Topic::Cybersecurity).await;
            assert_eq!(text, ERROR_FALLBACK);
        }
    }

    #[tokio::test]
    async fn test_empty_answer_is_not_success() {
        for answer in ["", "   ", "\n\t "] {
            let fetcher = InsightFetcher::new(StaticProvider(Ok(answer.to_string())));
            let text = fetcher.fetch(Topic::ProfessionalGrowth).await;
            assert_eq!(text, EMPTY_FALLBACK);
            assert!(!text.is_empty());
        }
    }

    #[tokio::test]
    async fn test_answer_is_trimmed() {
        let fetcher = InsightFetcher::new(StaticProvider(Ok("  Keep shipping.  ".to_string())));
        assert_eq!(fetcher.fetch(Topic::default()).await, "Keep shipping.");
    }

    #[test]
    fn test_prompt_embeds_topic_and_limit() {
        let fetcher = InsightFetcher::new(StaticProvider(Ok(String::new()))).with_temperature(0.5);
        let prompt = fetcher.prompt_for(Topic::InnovativeProjectBuilding);
        assert_eq!(prompt.topic, Topic::InnovativeProjectBuilding);
        assert!(prompt.text.contains("about innovative project building for"));
        assert!(prompt.text.contains("named Uttam Kumar."));
        assert!(prompt.text.ends_with("Keep it under 20 words."));
        assert_eq!(prompt.temperature, 0.5);
        assert_eq!(
            InsightFetcher::new(StaticProvider(Ok(String::new())))
                .prompt_for(Topic::Cybersecurity)
                .temperature,
            DEFAULT_TEMPERATURE
        );
    }

    #[test]
    fn test_tracker_starts_with_greeting() {
        let tracker = InsightTracker::default();
        assert_eq!(tracker.text(), DEFAULT_INSIGHT);
    }

    #[test]
    fn test_tracker_discards_stale_tokens() {
        let mut tracker = InsightTracker::default();
        let home = tracker.begin();
        let about = tracker.begin();
        let projects = tracker.begin();
        assert!(!tracker.is_pending(about));

        assert!(tracker.resolve(projects, "projects tip".to_string()));
        assert!(!tracker.resolve(about, "about tip".to_string()));
        assert!(!tracker.resolve(home, "home tip".to_string()));
        assert_eq!(tracker.text(), "projects tip");
    }

    #[test]
    fn test_tracker_keeps_text_on_blank() {
        let mut tracker = InsightTracker::default();
        let token = tracker.begin();
        assert!(!tracker.resolve(token, "  ".to_string()));
        assert_eq!(tracker.text(), DEFAULT_INSIGHT);
        assert!(tracker.resolve(token, " Ship it. ".to_string()));
        assert_eq!(tracker.text(), "Ship it.");
    }

    #[tokio::test]
    async fn test_rapid_navigation_keeps_latest_page_tip() {
        let provider = GatedProvider::default();
        let home_gate = provider.gate(Topic::GeneralSoftwareEngineering);
        let about_gate = provider.gate(Topic::ProfessionalGrowth);
        let projects_gate = provider.gate(Topic::InnovativeProjectBuilding);

        let fetcher = Arc::new(InsightFetcher::new(provider));
        let tracker = Arc::new(Mutex::new(InsightTracker::default()));

        let mut handles = Vec::new();
        for page in [Page::Home, Page::About, Page::Projects] {
            let fetcher = fetcher.clone();
            let request = async move { fetcher.fetch(page.topic()).await };
            let finish = start_request(tracker.clone(), request).unwrap();
            handles.push(tokio::spawn(finish));
        }
        let mut handles = handles.into_iter();
        let (home, about, projects) = (
            handles.next().unwrap(),
            handles.next().unwrap(),
            handles.next().unwrap(),
        );

        projects_gate.send("Build things people use.".to_string()).unwrap();
        assert!(projects.await.unwrap());
        about_gate.send("Ask for feedback early.".to_string()).unwrap();
        assert!(!about.await.unwrap());
        home_gate.send("Read other people's code.".to_string()).unwrap();
        assert!(!home.await.unwrap());

        assert_eq!(tracker.lock().unwrap().text(), "Build things people use.");
        let seen = fetcher.provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn test_start_request_begins_before_awaiting() {
        let tracker = Arc::new(Mutex::new(InsightTracker::default()));
        let first = start_request(tracker.clone(), async { "first".to_string() }).unwrap();
        let second = start_request(tracker.clone(), async { "second".to_string() }).unwrap();

        // the later request wins even though it finishes first
        assert!(second.await);
        assert!(!first.await);
        assert_eq!(tracker.lock().unwrap().text(), "second");
    }

    #[tokio::test]
    async fn test_start_request_keeps_text_on_failure_paths() {
        let tracker = Arc::new(Mutex::new(InsightTracker::default()));
        let fetcher = InsightFetcher::new(StaticProvider(Err(InsightError::Timeout)));
        let finish = start_request(tracker.clone(), fetcher.fetch(Topic::Cybersecurity)).unwrap();
        assert!(finish.await);
        assert_eq!(tracker.lock().unwrap().text(), ERROR_FALLBACK);

        let finish = start_request(tracker.clone(), async { " \n".to_string() }).unwrap();
        assert!(!finish.await);
        assert_eq!(tracker.lock().unwrap().text(), ERROR_FALLBACK);
    }

    #[test]
    fn test_start_request_without_tracker_does_nothing() {
        assert!(start_request(Disposed, async { "unused".to_string() }).is_none());
    }
}
