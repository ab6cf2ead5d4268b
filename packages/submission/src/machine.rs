//! The submission state machine.
//!
//! The machine is pure: it interprets events, updates its own state, and
//! optionally emits a command for the driver to execute. No IO happens here.
//! Every transition that leads to a creation call passes through an approved
//! verdict, so the moderation gate cannot be bypassed by construction.
//!
//! # Key Properties
//!
//! - **State is internal**: one machine per composer, mutated via `&mut self`
//! - **Pure decisions**: `apply` is synchronous, no async, no network
//! - **One event, at most one command**: `apply` returns `Option<Command>`
//! - **Fail-closed**: only an exact `approved` verdict unlocks creation

use dugout_client::{ContentDraft, ModerationVerdict, NewPost, Post};
use tracing::debug;

use crate::error::SubmissionError;

/// Where one submission attempt currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPhase {
    /// Nothing in flight. The composer is editable.
    Idle,
    /// A check command was emitted but not yet handed to the transport.
    Submitting,
    /// The moderation check is in flight.
    AwaitingVerdict,
    /// The verdict came back approved; a creation command was emitted.
    Approved,
    /// The creation call is in flight.
    Creating,
    /// The post was created and is published.
    Done { post: Post },
    /// Moderation did not approve the content. Nothing was created.
    Blocked,
    /// A step failed. Nothing is published.
    Failed { error: SubmissionError },
}

/// Facts the machine interprets.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    /// The user asked to publish a draft.
    SubmitRequested { draft: ContentDraft },
    /// The check command was handed to the transport.
    CheckDispatched,
    /// The moderation service returned a verdict.
    VerdictReceived { verdict: ModerationVerdict },
    /// The moderation check could not be completed.
    CheckFailed { message: String },
    /// The creation command was handed to the transport.
    CreateDispatched,
    /// The post exists server-side.
    PostCreated { post: Post },
    /// The creation call failed after approval.
    CreateFailed { message: String },
    /// The user dismissed the verdict banner.
    VerdictDismissed,
}

/// IO the machine wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionCommand {
    /// Ask the moderation service for a verdict on this draft.
    CheckContent { draft: ContentDraft },
    /// Publish an approved draft to a board.
    CreatePost { board_id: String, post: NewPost },
}

impl SubmissionCommand {
    /// The event that records this command crossing into IO.
    ///
    /// Applying it moves the machine into the matching in-flight phase before
    /// the driver awaits the network.
    pub fn dispatch_event(&self) -> SubmissionEvent {
        match self {
            SubmissionCommand::CheckContent { .. } => SubmissionEvent::CheckDispatched,
            SubmissionCommand::CreatePost { .. } => SubmissionEvent::CreateDispatched,
        }
    }
}

/// One composer's submission workflow.
///
/// Holds the target board, the current phase, the draft for the attempt in
/// flight, and the most recent verdict for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionMachine {
    board_id: String,
    phase: SubmissionPhase,
    draft: Option<ContentDraft>,
    verdict: Option<ModerationVerdict>,
}

impl SubmissionMachine {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            phase: SubmissionPhase::Idle,
            draft: None,
            verdict: None,
        }
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// The verdict from the current or most recent attempt, if any.
    ///
    /// Retained through `Blocked` and a failed creation so the banner can
    /// show why publication stopped. Cleared on dismissal and on resubmit.
    pub fn verdict(&self) -> Option<&ModerationVerdict> {
        self.verdict.as_ref()
    }

    /// True while a check or creation is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Submitting
                | SubmissionPhase::AwaitingVerdict
                | SubmissionPhase::Approved
                | SubmissionPhase::Creating
        )
    }

    /// True once the attempt has reached an outcome (or never started).
    pub fn is_settled(&self) -> bool {
        !self.is_busy()
    }

    /// Interpret one event. Returns the command to execute, if any.
    ///
    /// Events that do not apply to the current phase are ignored without a
    /// state change.
    pub fn apply(&mut self, event: &SubmissionEvent) -> Option<SubmissionCommand> {
        match event {
            SubmissionEvent::SubmitRequested { draft } => {
                if self.is_busy() {
                    debug!(phase = ?self.phase, "submit ignored while an attempt is in flight");
                    return None;
                }
                if draft.is_blank() {
                    debug!("submit ignored for blank draft");
                    return None;
                }
                self.verdict = None;
                self.draft = Some(draft.clone());
                self.phase = SubmissionPhase::Submitting;
                Some(SubmissionCommand::CheckContent {
                    draft: draft.clone(),
                })
            }
            SubmissionEvent::CheckDispatched => {
                if self.phase == SubmissionPhase::Submitting {
                    self.phase = SubmissionPhase::AwaitingVerdict;
                }
                None
            }
            SubmissionEvent::VerdictReceived { verdict } => {
                if self.phase != SubmissionPhase::AwaitingVerdict {
                    return None;
                }
                self.verdict = Some(verdict.clone());
                if verdict.result.is_approved() {
                    self.phase = SubmissionPhase::Approved;
                    self.draft
                        .as_ref()
                        .map(|draft| SubmissionCommand::CreatePost {
                            board_id: self.board_id.clone(),
                            post: NewPost {
                                title: draft.title.clone().unwrap_or_default(),
                                content: draft.body.clone(),
                            },
                        })
                } else {
                    // Rejected and unrecognized verdicts both block.
                    self.draft = None;
                    self.phase = SubmissionPhase::Blocked;
                    None
                }
            }
            SubmissionEvent::CheckFailed { message } => {
                if self.phase != SubmissionPhase::AwaitingVerdict {
                    return None;
                }
                self.draft = None;
                self.phase = SubmissionPhase::Failed {
                    error: SubmissionError::ModerationUnavailable(message.clone()),
                };
                None
            }
            SubmissionEvent::CreateDispatched => {
                if self.phase == SubmissionPhase::Approved {
                    self.phase = SubmissionPhase::Creating;
                }
                None
            }
            SubmissionEvent::PostCreated { post } => {
                if self.phase != SubmissionPhase::Creating {
                    return None;
                }
                self.draft = None;
                self.phase = SubmissionPhase::Done { post: post.clone() };
                None
            }
            SubmissionEvent::CreateFailed { message } => {
                if self.phase != SubmissionPhase::Creating {
                    return None;
                }
                // The verdict slot is kept so the banner can explain that the
                // content cleared moderation but was not published.
                self.draft = None;
                self.phase = SubmissionPhase::Failed {
                    error: SubmissionError::ContentCreationFailed(message.clone()),
                };
                None
            }
            SubmissionEvent::VerdictDismissed => {
                if self.is_settled() {
                    self.verdict = None;
                    self.phase = SubmissionPhase::Idle;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dugout_client::{ContentDraft, VerdictResult};

    fn verdict(result: VerdictResult, reason: &str, score: f64) -> ModerationVerdict {
        ModerationVerdict {
            moderation_id: "m1".to_string(),
            result,
            reason: reason.to_string(),
            score,
        }
    }

    fn post() -> Post {
        Post {
            post_id: "p1".to_string(),
            board_id: "hot-stove".to_string(),
            title: "Trade rumors".to_string(),
            content: "Who says no?".to_string(),
            created_at: 1_700_000_000,
        }
    }

    /// Drive a fresh machine up to `AwaitingVerdict` with the given draft.
    fn awaiting(draft: ContentDraft) -> SubmissionMachine {
        let mut machine = SubmissionMachine::new("hot-stove");
        let cmd = machine.apply(&SubmissionEvent::SubmitRequested { draft });
        assert!(matches!(cmd, Some(SubmissionCommand::CheckContent { .. })));
        machine.apply(&SubmissionEvent::CheckDispatched);
        assert_eq!(*machine.phase(), SubmissionPhase::AwaitingVerdict);
        machine
    }

    #[test]
    fn blank_draft_never_starts_an_attempt() {
        let mut machine = SubmissionMachine::new("hot-stove");

        let cmd = machine.apply(&SubmissionEvent::SubmitRequested {
            draft: ContentDraft::post("Title", "   \n\t  "),
        });

        assert!(cmd.is_none());
        assert_eq!(*machine.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn approved_verdict_emits_exactly_one_create_command() {
        let mut machine = awaiting(ContentDraft::post("Trade rumors", "Who says no?"));

        let cmd = machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Approved, "OK", 0.95),
        });

        match cmd {
            Some(SubmissionCommand::CreatePost { board_id, post }) => {
                assert_eq!(board_id, "hot-stove");
                assert_eq!(post.title, "Trade rumors");
                assert_eq!(post.content, "Who says no?");
            }
            other => panic!("expected CreatePost, got {:?}", other),
        }
        assert_eq!(*machine.phase(), SubmissionPhase::Approved);

        machine.apply(&SubmissionEvent::CreateDispatched);
        assert_eq!(*machine.phase(), SubmissionPhase::Creating);

        let cmd = machine.apply(&SubmissionEvent::PostCreated { post: post() });
        assert!(cmd.is_none());
        assert!(matches!(machine.phase(), SubmissionPhase::Done { .. }));
    }

    #[test]
    fn rejected_verdict_blocks_without_a_command() {
        let mut machine = awaiting(ContentDraft::comment("spam spam spam"));

        let cmd = machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Rejected, "spam detected", 0.1),
        });

        assert!(cmd.is_none());
        assert_eq!(*machine.phase(), SubmissionPhase::Blocked);
        assert_eq!(machine.verdict().map(|v| v.reason.as_str()), Some("spam detected"));
    }

    #[test]
    fn unrecognized_verdict_blocks_like_a_rejection() {
        let mut machine = awaiting(ContentDraft::post("Title", "body"));

        let cmd = machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Unknown, "needs review", 0.5),
        });

        assert!(cmd.is_none());
        assert_eq!(*machine.phase(), SubmissionPhase::Blocked);
    }

    #[test]
    fn check_failure_fails_closed() {
        let mut machine = awaiting(ContentDraft::post("Title", "body"));

        let cmd = machine.apply(&SubmissionEvent::CheckFailed {
            message: "connection refused".to_string(),
        });

        assert!(cmd.is_none());
        assert_eq!(
            *machine.phase(),
            SubmissionPhase::Failed {
                error: SubmissionError::ModerationUnavailable("connection refused".to_string()),
            }
        );
    }

    #[test]
    fn create_failure_keeps_the_verdict_visible() {
        let mut machine = awaiting(ContentDraft::post("Trade rumors", "Who says no?"));
        machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Approved, "OK", 0.95),
        });
        machine.apply(&SubmissionEvent::CreateDispatched);

        machine.apply(&SubmissionEvent::CreateFailed {
            message: "500 internal server error".to_string(),
        });

        assert_eq!(
            *machine.phase(),
            SubmissionPhase::Failed {
                error: SubmissionError::ContentCreationFailed(
                    "500 internal server error".to_string()
                ),
            }
        );
        assert!(machine.verdict().is_some(), "verdict stays for the banner");
    }

    #[test]
    fn submit_is_ignored_while_an_attempt_is_in_flight() {
        let mut machine = awaiting(ContentDraft::post("First", "first body"));

        let cmd = machine.apply(&SubmissionEvent::SubmitRequested {
            draft: ContentDraft::post("Second", "second body"),
        });

        assert!(cmd.is_none());
        assert_eq!(*machine.phase(), SubmissionPhase::AwaitingVerdict);
    }

    #[test]
    fn dismissal_clears_the_verdict_and_is_idempotent() {
        let mut machine = awaiting(ContentDraft::comment("spam spam spam"));
        machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Rejected, "spam detected", 0.1),
        });
        assert!(machine.verdict().is_some());

        machine.apply(&SubmissionEvent::VerdictDismissed);
        assert_eq!(*machine.phase(), SubmissionPhase::Idle);
        assert!(machine.verdict().is_none());

        // A second dismissal changes nothing.
        let cmd = machine.apply(&SubmissionEvent::VerdictDismissed);
        assert!(cmd.is_none());
        assert_eq!(*machine.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn dismissal_mid_flight_does_not_abort_the_attempt() {
        let mut machine = awaiting(ContentDraft::post("Title", "body"));

        machine.apply(&SubmissionEvent::VerdictDismissed);

        assert_eq!(*machine.phase(), SubmissionPhase::AwaitingVerdict);
    }

    #[test]
    fn resubmit_after_block_starts_a_fresh_attempt() {
        let mut machine = awaiting(ContentDraft::comment("spam spam spam"));
        machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Rejected, "spam detected", 0.1),
        });
        assert_eq!(*machine.phase(), SubmissionPhase::Blocked);

        let cmd = machine.apply(&SubmissionEvent::SubmitRequested {
            draft: ContentDraft::comment("a reasonable take"),
        });

        assert!(matches!(cmd, Some(SubmissionCommand::CheckContent { .. })));
        assert_eq!(*machine.phase(), SubmissionPhase::Submitting);
        assert!(machine.verdict().is_none(), "stale verdict cleared");
    }

    #[test]
    fn stale_verdicts_are_ignored_outside_awaiting() {
        let mut machine = SubmissionMachine::new("hot-stove");

        let cmd = machine.apply(&SubmissionEvent::VerdictReceived {
            verdict: verdict(VerdictResult::Approved, "OK", 0.99),
        });

        assert!(cmd.is_none(), "approval out of phase must not create");
        assert_eq!(*machine.phase(), SubmissionPhase::Idle);
        assert!(machine.verdict().is_none());
    }
}
