//! # Submission
//!
//! The moderation-gated submission workflow: a pure state machine decides,
//! an async driver executes.
//!
//! ## Core Concepts
//!
//! The workflow separates **facts** from **intent**:
//! - [`SubmissionEvent`] = facts (what happened)
//! - [`SubmissionCommand`] = intent (requests for IO)
//!
//! [`SubmissionMachine::apply`] interprets one event, updates internal state,
//! and returns at most one command. [`driver::execute`] performs exactly one
//! gateway call per command and reports the outcome as the next event.
//!
//! ## Key Invariants
//!
//! 1. **The machine is pure** - no IO, no async, state is internal
//! 2. **Fail-closed** - only an exact `approved` verdict emits the creation
//!    command; rejections, unrecognized verdicts, and transport failures all
//!    withhold publication
//! 3. **One chain per attempt** - the check strictly precedes any creation
//!    call, and each attempt creates at most once
//!
//! ## Example
//!
//! ```ignore
//! use dugout_client::ContentDraft;
//! use submission::{run_submission, SubmissionMachine, SubmissionPhase};
//!
//! let mut machine = SubmissionMachine::new("hot-stove");
//! run_submission(
//!     &mut machine,
//!     &gate,
//!     &writer,
//!     ContentDraft::post("Opening day", "First pitch at 1:10pm."),
//! )
//! .await;
//!
//! match machine.phase() {
//!     SubmissionPhase::Done { post } => println!("published {}", post.post_id),
//!     SubmissionPhase::Blocked => println!("moderation said no"),
//!     _ => {}
//! }
//! ```

pub mod driver;
pub mod error;
pub mod machine;

pub use driver::{execute, run_submission, ModerationGate, PostWriter};
pub use error::SubmissionError;
pub use machine::{SubmissionCommand, SubmissionEvent, SubmissionMachine, SubmissionPhase};
