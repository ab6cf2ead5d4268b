//! Gateway seams and the command executor.
//!
//! The machine decides, the driver executes. `execute` performs exactly one
//! gateway call per command and reports the outcome as an event; the loop in
//! `run_submission` feeds events back into the machine until it stops
//! emitting commands.
//!
//! Futures are not required to be `Send`: the web front-end drives this loop
//! from a single-threaded scheduler.

use anyhow::Result;
use async_trait::async_trait;
use dugout_client::{ContentDraft, ModerationVerdict, NewPost, Post};
use tracing::warn;

use crate::machine::{SubmissionCommand, SubmissionEvent, SubmissionMachine};

// =============================================================================
// Gateway Traits
// =============================================================================

/// The moderation decision service.
#[async_trait(?Send)]
pub trait ModerationGate {
    /// Ask for a verdict on a draft. Stateless and safe to retry.
    async fn check_content(&self, draft: &ContentDraft) -> Result<ModerationVerdict>;
}

/// Content persistence.
#[async_trait(?Send)]
pub trait PostWriter {
    /// Publish a post to a board. Not idempotent.
    async fn create_post(&self, board_id: &str, post: &NewPost) -> Result<Post>;
}

// =============================================================================
// Executor
// =============================================================================

/// Execute one command and report what happened as an event.
///
/// Performs exactly one gateway call. A failure becomes a failure event; it
/// is never swallowed and never read as approval.
pub async fn execute(
    gate: &dyn ModerationGate,
    writer: &dyn PostWriter,
    command: SubmissionCommand,
) -> SubmissionEvent {
    match command {
        SubmissionCommand::CheckContent { draft } => match gate.check_content(&draft).await {
            Ok(verdict) => SubmissionEvent::VerdictReceived { verdict },
            Err(err) => {
                warn!(error = %err, "moderation check failed");
                SubmissionEvent::CheckFailed {
                    message: format!("{err:#}"),
                }
            }
        },
        SubmissionCommand::CreatePost { board_id, post } => {
            match writer.create_post(&board_id, &post).await {
                Ok(post) => SubmissionEvent::PostCreated { post },
                Err(err) => {
                    warn!(error = %err, board_id, "post creation failed");
                    SubmissionEvent::CreateFailed {
                        message: format!("{err:#}"),
                    }
                }
            }
        }
    }
}

/// Run one submission attempt to completion.
///
/// apply, dispatch, execute, apply again, until no command remains. The
/// caller reads the outcome from the machine's phase.
pub async fn run_submission(
    machine: &mut SubmissionMachine,
    gate: &dyn ModerationGate,
    writer: &dyn PostWriter,
    draft: ContentDraft,
) {
    let mut command = machine.apply(&SubmissionEvent::SubmitRequested { draft });
    while let Some(cmd) = command {
        machine.apply(&cmd.dispatch_event());
        let event = execute(gate, writer, cmd).await;
        command = machine.apply(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use dugout_client::VerdictResult;

    use crate::error::SubmissionError;
    use crate::machine::SubmissionPhase;

    /// Records the order of gateway calls across mocks.
    #[derive(Clone, Default)]
    struct CallJournal(Arc<Mutex<Vec<&'static str>>>);

    impl CallJournal {
        fn record(&self, step: &'static str) {
            self.0.lock().unwrap().push(step);
        }

        fn steps(&self) -> Vec<&'static str> {
            self.0.lock().unwrap().clone()
        }
    }

    // =========================================================================
    // Mock Moderation Gate
    // =========================================================================

    struct MockModerationGate {
        verdicts: Arc<Mutex<Vec<Result<ModerationVerdict>>>>,
        check_calls: Arc<Mutex<Vec<ContentDraft>>>,
        journal: CallJournal,
    }

    impl MockModerationGate {
        fn new() -> Self {
            Self {
                verdicts: Arc::new(Mutex::new(Vec::new())),
                check_calls: Arc::new(Mutex::new(Vec::new())),
                journal: CallJournal::default(),
            }
        }

        fn with_verdict(self, result: VerdictResult, reason: &str, score: f64) -> Self {
            self.verdicts.lock().unwrap().push(Ok(ModerationVerdict {
                moderation_id: "m1".to_string(),
                result,
                reason: reason.to_string(),
                score,
            }));
            self
        }

        fn with_failure(self, message: &str) -> Self {
            self.verdicts
                .lock()
                .unwrap()
                .push(Err(anyhow::anyhow!(message.to_string())));
            self
        }

        fn with_journal(mut self, journal: CallJournal) -> Self {
            self.journal = journal;
            self
        }

        fn check_calls(&self) -> Vec<ContentDraft> {
            self.check_calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl ModerationGate for MockModerationGate {
        async fn check_content(&self, draft: &ContentDraft) -> Result<ModerationVerdict> {
            self.check_calls.lock().unwrap().push(draft.clone());
            self.journal.record("check");

            let mut verdicts = self.verdicts.lock().unwrap();
            if verdicts.is_empty() {
                anyhow::bail!("no verdict queued for {:?}", draft.body);
            }
            verdicts.remove(0)
        }
    }

    // =========================================================================
    // Mock Post Writer
    // =========================================================================

    struct MockPostWriter {
        results: Arc<Mutex<Vec<Result<Post>>>>,
        create_calls: Arc<Mutex<Vec<(String, NewPost)>>>,
        journal: CallJournal,
    }

    impl MockPostWriter {
        fn new() -> Self {
            Self {
                results: Arc::new(Mutex::new(Vec::new())),
                create_calls: Arc::new(Mutex::new(Vec::new())),
                journal: CallJournal::default(),
            }
        }

        fn with_failure(self, message: &str) -> Self {
            self.results
                .lock()
                .unwrap()
                .push(Err(anyhow::anyhow!(message.to_string())));
            self
        }

        fn with_journal(mut self, journal: CallJournal) -> Self {
            self.journal = journal;
            self
        }

        fn create_calls(&self) -> Vec<(String, NewPost)> {
            self.create_calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl PostWriter for MockPostWriter {
        async fn create_post(&self, board_id: &str, post: &NewPost) -> Result<Post> {
            self.create_calls
                .lock()
                .unwrap()
                .push((board_id.to_string(), post.clone()));
            self.journal.record("create");

            let mut results = self.results.lock().unwrap();
            if !results.is_empty() {
                return results.remove(0);
            }
            Ok(Post {
                post_id: "mock-post".to_string(),
                board_id: board_id.to_string(),
                title: post.title.clone(),
                content: post.content.clone(),
                created_at: 0,
            })
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[tokio::test]
    async fn approved_draft_is_published_exactly_once() {
        let gate = MockModerationGate::new().with_verdict(VerdictResult::Approved, "OK", 0.95);
        let writer = MockPostWriter::new();
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("Opening day", "こんにちは"),
        )
        .await;

        assert_eq!(gate.check_calls().len(), 1);
        let creates = writer.create_calls();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].0, "hot-stove");
        assert_eq!(creates[0].1.content, "こんにちは");
        assert!(matches!(machine.phase(), SubmissionPhase::Done { .. }));
    }

    #[tokio::test]
    async fn rejected_draft_is_never_published() {
        let gate =
            MockModerationGate::new().with_verdict(VerdictResult::Rejected, "spam detected", 0.1);
        let writer = MockPostWriter::new();
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::comment("spam spam spam"),
        )
        .await;

        assert_eq!(gate.check_calls().len(), 1);
        assert!(writer.create_calls().is_empty());
        assert_eq!(*machine.phase(), SubmissionPhase::Blocked);
        assert_eq!(
            machine.verdict().map(|v| v.reason.as_str()),
            Some("spam detected")
        );
    }

    #[tokio::test]
    async fn blank_draft_makes_no_network_calls() {
        let gate = MockModerationGate::new();
        let writer = MockPostWriter::new();
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(&mut machine, &gate, &writer, ContentDraft::post("Title", "   ")).await;

        assert!(gate.check_calls().is_empty());
        assert!(writer.create_calls().is_empty());
        assert_eq!(*machine.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn check_failure_blocks_publication() {
        let gate = MockModerationGate::new().with_failure("connection refused");
        let writer = MockPostWriter::new();
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("Title", "a fine body"),
        )
        .await;

        assert!(writer.create_calls().is_empty());
        match machine.phase() {
            SubmissionPhase::Failed {
                error: SubmissionError::ModerationUnavailable(message),
            } => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected moderation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_failure_reports_without_publishing() {
        let gate = MockModerationGate::new().with_verdict(VerdictResult::Approved, "OK", 0.9);
        let writer = MockPostWriter::new().with_failure("500 internal server error");
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("Title", "a fine body"),
        )
        .await;

        assert_eq!(writer.create_calls().len(), 1);
        match machine.phase() {
            SubmissionPhase::Failed {
                error: SubmissionError::ContentCreationFailed(message),
            } => {
                assert!(message.contains("500"));
            }
            other => panic!("expected creation failure, got {:?}", other),
        }
        assert!(machine.verdict().is_some(), "approval stays visible");
    }

    #[tokio::test]
    async fn create_call_strictly_follows_the_verdict() {
        let journal = CallJournal::default();
        let gate = MockModerationGate::new()
            .with_verdict(VerdictResult::Approved, "OK", 0.95)
            .with_journal(journal.clone());
        let writer = MockPostWriter::new().with_journal(journal.clone());
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("Title", "a fine body"),
        )
        .await;

        assert_eq!(journal.steps(), vec!["check", "create"]);
    }

    #[tokio::test]
    async fn each_attempt_is_gated_independently() {
        let gate = MockModerationGate::new()
            .with_verdict(VerdictResult::Approved, "OK", 0.95)
            .with_verdict(VerdictResult::Rejected, "edited into spam", 0.2);
        let writer = MockPostWriter::new();
        let mut machine = SubmissionMachine::new("hot-stove");

        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("First", "a fine body"),
        )
        .await;
        machine.apply(&SubmissionEvent::VerdictDismissed);
        run_submission(
            &mut machine,
            &gate,
            &writer,
            ContentDraft::post("Second", "a worse body"),
        )
        .await;

        assert_eq!(gate.check_calls().len(), 2);
        // The first attempt's approval does not carry over.
        assert_eq!(writer.create_calls().len(), 1);
        assert_eq!(*machine.phase(), SubmissionPhase::Blocked);
    }
}
