//! Submit-and-reconcile protocol for a translation session.
//!
//! A submission moves through `begin_submission` (validate, record the user
//! message, clear the draft, mark pending), one awaited capability call, and
//! `finish` (record the reply or the failure notice, clear pending). Only
//! the await in between yields control.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::message::Message;
use super::state::{Session, SessionError};
use crate::translation::{
    Language, TranslationCapability, TranslationError, TranslationRequest, build_directive,
};

/// Reply text used when the capability answers with nothing usable.
pub const EMPTY_TRANSLATION: &str = "Translation error";

/// Reply text used for every failed translation.
pub const FAILURE_NOTICE: &str =
    "Sorry, an error occurred during translation. Please check your API key.";

/// Upper bound on a single capability call unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The draft is empty or whitespace only.
    EmptySubmission,
    /// Another submission is still awaiting its reply.
    ConcurrentSubmission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(Rejection),
    Translated,
    Failed,
}

/// An accepted submission whose reply has not been recorded yet.
///
/// Only `SessionController::begin_submission` creates one, and handing it
/// back to `SessionController::finish` is what clears the pending flag.
#[derive(Debug)]
#[must_use = "a pending translation keeps the session busy until it is finished"]
pub struct PendingTranslation {
    request: TranslationRequest,
    target: &'static Language,
}

impl PendingTranslation {
    pub const fn request(&self) -> &TranslationRequest {
        &self.request
    }

    /// Target language captured when the submission was accepted.
    pub const fn target_language(&self) -> &'static Language {
        self.target
    }
}

/// Owns the session and is its only writer.
pub struct SessionController {
    session: Session,
    capability: Arc<dyn TranslationCapability>,
    request_timeout: Option<Duration>,
}

impl SessionController {
    pub fn new(session: Session, capability: Arc<dyn TranslationCapability>) -> Self {
        Self {
            session,
            capability,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// Sets the bound on each capability call. `None` waits indefinitely.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.session.set_draft_input(text);
    }

    /// Changes the source language. Allowed while a request is in flight.
    pub fn select_source_language(&mut self, code: &str) -> Result<(), SessionError> {
        self.session.set_source_language(code).inspect_err(|err| {
            tracing::debug!(error = %err, "source language selection rejected");
        })
    }

    /// Changes the target language. An in-flight request keeps the target it
    /// was submitted with.
    pub fn select_target_language(&mut self, code: &str) -> Result<(), SessionError> {
        self.session.set_target_language(code).inspect_err(|err| {
            tracing::debug!(error = %err, "target language selection rejected");
        })
    }

    /// Submits the current draft and waits for the reply.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_with_cancel(std::future::pending()).await
    }

    /// Like [`submit`](Self::submit), but gives up on the reply as soon as
    /// `cancel` completes. A cancelled request is recorded as a failure.
    ///
    /// Dropping the returned future mid-flight also records a failure, so
    /// the session never stays pending.
    pub async fn submit_with_cancel<F>(&mut self, cancel: F) -> SubmitOutcome
    where
        F: Future<Output = ()>,
    {
        let pending = match self.begin_submission() {
            Ok(pending) => pending,
            Err(rejection) => {
                tracing::debug!(?rejection, "submission ignored");
                return SubmitOutcome::Ignored(rejection);
            }
        };

        let capability = Arc::clone(&self.capability);
        let limit = self.request_timeout;
        let guard = InFlight::new(&mut self.session);

        let result = tokio::select! {
            result = dispatch(capability.as_ref(), limit, &pending.request) => result,
            () = cancel => Err(TranslationError::Cancelled),
        };

        guard.settle(pending, result)
    }

    /// Accepts the draft if there is one and nothing is in flight.
    ///
    /// On acceptance the user message is appended, the draft cleared and the
    /// session marked pending, all before this returns.
    pub fn begin_submission(&mut self) -> Result<PendingTranslation, Rejection> {
        if self.session.is_pending() {
            return Err(Rejection::ConcurrentSubmission);
        }
        if self.session.draft_input().trim().is_empty() {
            return Err(Rejection::EmptySubmission);
        }

        let content = self.session.draft_input().to_string();
        let source = self.session.source_language();
        let target = self.session.target_language();

        self.session.append_message(Message::user(content.clone()));
        self.session.clear_draft();
        self.session.set_pending(true);

        tracing::debug!(
            source_language = source.code,
            target_language = target.code,
            chars = content.chars().count(),
            "submission accepted"
        );

        Ok(PendingTranslation {
            request: TranslationRequest {
                directive: build_directive(source.name, target.name),
                content,
            },
            target,
        })
    }

    /// Records the outcome of an accepted submission and clears pending.
    pub fn finish(
        &mut self,
        pending: PendingTranslation,
        result: Result<String, TranslationError>,
    ) -> SubmitOutcome {
        record(&mut self.session, pending, result)
    }
}

/// Holds the session while a submission is in flight.
///
/// If it is dropped before `settle`, the submission is recorded as failed.
struct InFlight<'a> {
    session: &'a mut Session,
    settled: bool,
}

impl<'a> InFlight<'a> {
    const fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            settled: false,
        }
    }

    fn settle(
        mut self,
        pending: PendingTranslation,
        result: Result<String, TranslationError>,
    ) -> SubmitOutcome {
        self.settled = true;
        record(&mut *self.session, pending, result)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!("translation abandoned before a reply arrived");
        self.session.append_message(Message::system(FAILURE_NOTICE));
        self.session.set_pending(false);
    }
}

fn record(
    session: &mut Session,
    pending: PendingTranslation,
    result: Result<String, TranslationError>,
) -> SubmitOutcome {
    let outcome = match result {
        Ok(text) => {
            let text = if text.trim().is_empty() {
                EMPTY_TRANSLATION.to_string()
            } else {
                text
            };
            session.append_message(Message::translation(text, pending.target));
            tracing::debug!(target_language = pending.target.code, "translation received");
            SubmitOutcome::Translated
        }
        Err(err) => {
            tracing::warn!(error = %err, "translation failed");
            session.append_message(Message::system(FAILURE_NOTICE));
            SubmitOutcome::Failed
        }
    };

    session.set_pending(false);
    outcome
}

async fn dispatch(
    capability: &dyn TranslationCapability,
    limit: Option<Duration>,
    request: &TranslationRequest,
) -> Result<String, TranslationError> {
    let call = capability.translate(&request.directive, &request.content);

    match limit {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::Timeout(limit)),
        },
        None => call.await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::{GREETING, Origin};
    use crate::translation::LanguageCatalog;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const CATALOG: &[Language] = &[
        Language::new("en", "English", "🇬🇧"),
        Language::new("hi", "Hindi", "🇮🇳"),
        Language::new("ta", "Tamil", "🇮🇳"),
    ];

    /// Replies from a queue and records every call.
    #[derive(Default)]
    struct ScriptedCapability {
        replies: Mutex<VecDeque<Result<String, TranslationError>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedCapability {
        fn replying(reply: Result<String, TranslationError>) -> Arc<Self> {
            let capability = Self::default();
            capability.replies.lock().unwrap().push_back(reply);
            Arc::new(capability)
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationCapability for ScriptedCapability {
        async fn translate(
            &self,
            directive: &str,
            content: &str,
        ) -> Result<String, TranslationError> {
            self.calls
                .lock()
                .unwrap()
                .push((directive.to_string(), content.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TranslationError::Network("no reply queued".to_string())))
        }
    }

    /// Never answers.
    struct HangingCapability;

    #[async_trait]
    impl TranslationCapability for HangingCapability {
        async fn translate(&self, _: &str, _: &str) -> Result<String, TranslationError> {
            std::future::pending().await
        }
    }

    fn controller(capability: Arc<dyn TranslationCapability>) -> SessionController {
        let session = Session::new(LanguageCatalog::new(CATALOG), "en", "hi").unwrap();
        SessionController::new(session, capability)
    }

    #[tokio::test]
    async fn test_submit_success() {
        let capability = ScriptedCapability::replying(Ok("नमस्ते".to_string()));
        let mut controller = controller(capability.clone());

        controller.update_draft("hello");
        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Translated);
        let transcript = controller.session().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].text(), GREETING);
        assert_eq!(transcript[1].origin(), Origin::User);
        assert_eq!(transcript[1].text(), "hello");
        assert_eq!(transcript[2].origin(), Origin::System);
        assert_eq!(transcript[2].text(), "नमस्ते");
        assert_eq!(transcript[2].language_code(), Some("hi"));
        assert_eq!(controller.session().draft_input(), "");
        assert!(!controller.session().is_pending());
    }

    #[tokio::test]
    async fn test_submit_sends_directive_and_raw_text() {
        let capability = ScriptedCapability::replying(Ok("வணக்கம்".to_string()));
        let mut controller = controller(capability.clone());

        controller.select_target_language("ta").unwrap();
        controller.update_draft("  hello there ");
        controller.submit().await;

        let calls = capability.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("from English to Tamil"));
        assert_eq!(calls[0].1, "  hello there ");
        assert_eq!(controller.session().transcript()[1].text(), "  hello there ");
    }

    #[tokio::test]
    async fn test_empty_draft_is_ignored() {
        let capability = Arc::new(ScriptedCapability::default());
        let mut controller = controller(capability.clone());

        for draft in ["", "   ", "\n\t "] {
            controller.update_draft(draft);
            let outcome = controller.submit().await;
            assert_eq!(outcome, SubmitOutcome::Ignored(Rejection::EmptySubmission));
            assert_eq!(controller.session().transcript().len(), 1);
            assert!(!controller.session().is_pending());
        }
        assert!(capability.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_reply_becomes_placeholder() {
        for reply in ["", "  \n"] {
            let capability = ScriptedCapability::replying(Ok(reply.to_string()));
            let mut controller = controller(capability);

            controller.update_draft("hello");
            assert_eq!(controller.submit().await, SubmitOutcome::Translated);

            let last = controller.session().transcript().last().unwrap();
            assert_eq!(last.text(), EMPTY_TRANSLATION);
            assert_eq!(last.language_code(), Some("hi"));
        }
    }

    #[tokio::test]
    async fn test_failure_appends_notice() {
        let capability = ScriptedCapability::replying(Err(TranslationError::Auth {
            status: 401,
            body: "invalid api key".to_string(),
        }));
        let mut controller = controller(capability);

        controller.update_draft("hello");
        assert_eq!(controller.submit().await, SubmitOutcome::Failed);

        let transcript = controller.session().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].text(), FAILURE_NOTICE);
        assert!(transcript[2].language().is_none());
        assert!(!controller.session().is_pending());
    }

    #[tokio::test]
    async fn test_submit_while_pending_makes_no_call() {
        let capability = ScriptedCapability::replying(Ok("नमस्ते".to_string()));
        let mut controller = controller(capability.clone());

        controller.update_draft("hello");
        let pending = controller.begin_submission().unwrap();
        assert!(controller.session().is_pending());

        controller.update_draft("again");
        let outcome = controller.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Ignored(Rejection::ConcurrentSubmission)
        );
        assert!(capability.calls().is_empty());
        assert_eq!(controller.session().draft_input(), "again");

        let reply = capability
            .translate(&pending.request().directive, &pending.request().content)
            .await;
        controller.finish(pending, reply);

        assert_eq!(capability.calls().len(), 1);
        assert_eq!(controller.session().transcript().len(), 3);
        assert!(!controller.session().is_pending());
    }

    #[tokio::test]
    async fn test_target_change_in_flight_keeps_captured_target() {
        let mut controller = controller(Arc::new(ScriptedCapability::default()));

        controller.update_draft("hello");
        let pending = controller.begin_submission().unwrap();
        controller.select_target_language("ta").unwrap();
        controller.finish(pending, Ok("नमस्ते".to_string()));

        let last = controller.session().transcript().last().unwrap();
        assert_eq!(last.language_code(), Some("hi"));
        assert_eq!(controller.session().target_language().code, "ta");
    }

    #[tokio::test]
    async fn test_timeout_resets_pending() {
        let mut controller = controller(Arc::new(HangingCapability))
            .with_request_timeout(Some(Duration::from_millis(20)));

        controller.update_draft("hello");
        assert_eq!(controller.submit().await, SubmitOutcome::Failed);
        assert_eq!(
            controller.session().transcript().last().unwrap().text(),
            FAILURE_NOTICE
        );
        assert!(!controller.session().is_pending());
    }

    #[tokio::test]
    async fn test_cancel_resets_pending() {
        let mut controller = controller(Arc::new(HangingCapability)).with_request_timeout(None);

        controller.update_draft("hello");
        let outcome = controller.submit_with_cancel(async {}).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(controller.session().transcript().len(), 3);
        assert!(!controller.session().is_pending());
    }

    #[tokio::test]
    async fn test_dropped_submit_resets_pending() {
        let mut controller = controller(Arc::new(HangingCapability)).with_request_timeout(None);

        controller.update_draft("hello");
        let abandoned = tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;
        assert!(abandoned.is_err());

        let transcript = controller.session().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].text(), "hello");
        assert_eq!(transcript[2].text(), FAILURE_NOTICE);
        assert!(!controller.session().is_pending());

        controller.update_draft("again");
        assert!(controller.begin_submission().is_ok());
    }

    #[tokio::test]
    async fn test_aborted_task_resets_pending() {
        let controller = Arc::new(tokio::sync::Mutex::new(
            controller(Arc::new(HangingCapability)).with_request_timeout(None),
        ));
        controller.lock().await.update_draft("hello");

        let task = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.lock().await.submit().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        let controller = controller.lock().await;
        assert!(!controller.session().is_pending());
        assert_eq!(
            controller.session().transcript().last().unwrap().text(),
            FAILURE_NOTICE
        );
    }

    #[test]
    fn test_request_timeout_defaults_and_overrides() {
        let controller = controller(Arc::new(HangingCapability));
        assert_eq!(controller.request_timeout(), Some(DEFAULT_REQUEST_TIMEOUT));
        assert_eq!(controller.with_request_timeout(None).request_timeout(), None);
    }

    #[test]
    fn test_language_selection_always_valid() {
        let mut controller = controller(Arc::new(ScriptedCapability::default()));

        for code in ["ta", "xx", "", "en", "HI", "hi", "zz-ZZ", "ta"] {
            let _ = controller.select_source_language(code);
            let _ = controller.select_target_language(code);

            let catalog = controller.session().catalog();
            assert!(catalog.contains(controller.session().source_language().code));
            assert!(catalog.contains(controller.session().target_language().code));
        }
        assert_eq!(controller.session().source_language().code, "ta");
    }

    #[test]
    fn test_invalid_target_keeps_previous() {
        let mut controller = controller(Arc::new(ScriptedCapability::default()));

        let err = controller.select_target_language("xx").unwrap_err();
        assert_eq!(err, SessionError::InvalidLanguage("xx".to_string()));
        assert_eq!(controller.session().target_language().code, "hi");
    }
}
