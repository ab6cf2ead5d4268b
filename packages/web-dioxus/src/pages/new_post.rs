//! New post composer - the moderation-gated submission form

use dioxus::prelude::*;

use dugout_client::{ContentDraft, VerdictResult};
use submission::{execute, SubmissionError, SubmissionEvent, SubmissionMachine, SubmissionPhase};

use crate::components::{AlertSeverity, ModerationAlert};
use crate::gateways::ServerGateways;
use crate::routes::Route;

/// New post page - drafts go through the moderation gate before publication
#[component]
pub fn NewPostPage(board_id: String) -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut machine = use_signal({
        let board_id = board_id.clone();
        move || SubmissionMachine::new(board_id.clone())
    });
    let navigator = use_navigator();

    let is_busy = machine.read().is_busy();
    let can_submit = !is_busy && form_ready(&title(), &content());

    let handle_submit = move |_| {
        if machine.read().is_busy() || !form_ready(&title(), &content()) {
            return;
        }

        let draft = ContentDraft::post(title().trim().to_string(), content());
        let gateways = ServerGateways;

        spawn(async move {
            // The machine loop, with write borrows released before every
            // await so the UI can read phase changes mid-flight.
            let mut command = machine
                .write()
                .apply(&SubmissionEvent::SubmitRequested { draft });
            while let Some(cmd) = command {
                machine.write().apply(&cmd.dispatch_event());
                let event = execute(&gateways, &gateways, cmd).await;
                command = machine.write().apply(&event);
            }

            if let SubmissionPhase::Done { post } = machine.read().phase() {
                navigator.push(Route::BoardPage {
                    board_id: post.board_id.clone(),
                });
            }
        });
    };

    let handle_dismiss = move |_| {
        machine.write().apply(&SubmissionEvent::VerdictDismissed);
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-2xl mx-auto px-4 py-8",
                    Link {
                        to: Route::BoardPage { board_id: board_id.clone() },
                        class: "text-emerald-600 hover:text-emerald-700 text-sm mb-4 inline-block",
                        "\u{2190} Back to board"
                    }
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "New Post"
                    }
                    p {
                        class: "text-gray-600",
                        "Every post is checked by the moderator before it goes up."
                    }
                }
            }

            // Form
            main {
                class: "max-w-2xl mx-auto px-4 py-8",

                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6",
                    onsubmit: handle_submit,

                    {verdict_banner(&machine.read(), handle_dismiss)}

                    // Title field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Title "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                            placeholder: "What's on your mind?",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_busy,
                            required: true,
                        }
                    }

                    // Content field
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Content "
                            span { class: "text-red-500", "*" }
                        }
                        textarea {
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
                            placeholder: "Keep it about the game...",
                            rows: "8",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500 resize-none",
                            disabled: is_busy,
                            required: true,
                        }
                    }

                    // Submit button
                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_submit,
                        {busy_label(machine.read().phase())}
                    }
                }
            }
        }
    }
}

/// A post needs both a title and a body before it can go out.
fn form_ready(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

fn busy_label(phase: &SubmissionPhase) -> &'static str {
    match phase {
        SubmissionPhase::Submitting | SubmissionPhase::AwaitingVerdict => "Checking content...",
        SubmissionPhase::Approved | SubmissionPhase::Creating => "Publishing...",
        _ => "Publish Post",
    }
}

/// The banner explaining why the last attempt stopped, if it did.
fn verdict_banner(
    machine: &SubmissionMachine,
    on_dismiss: impl FnMut(MouseEvent) + 'static,
) -> Element {
    match machine.phase() {
        SubmissionPhase::Blocked => {
            let Some(verdict) = machine.verdict() else {
                return rsx! {};
            };
            let (severity, title) = if verdict.result == VerdictResult::Rejected {
                (AlertSeverity::Rejected, "Post rejected by moderation")
            } else {
                (AlertSeverity::Caution, "Post held by moderation")
            };
            rsx! {
                ModerationAlert {
                    severity,
                    title: title.to_string(),
                    detail: verdict.reason.clone(),
                    on_dismiss,
                }
            }
        }
        SubmissionPhase::Failed { error } => {
            let title = match error {
                SubmissionError::ModerationUnavailable(_) => "Moderation check failed",
                SubmissionError::ContentCreationFailed(_) => {
                    "Approved, but the post was not published"
                }
            };
            rsx! {
                ModerationAlert {
                    severity: AlertSeverity::Caution,
                    title: title.to_string(),
                    detail: error.message().to_string(),
                    on_dismiss,
                }
            }
        }
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::form_ready;

    #[test]
    fn untitled_post_is_not_ready() {
        assert!(!form_ready("", "a fine body"));
        assert!(!form_ready("   ", "a fine body"));
    }

    #[test]
    fn bodyless_post_is_not_ready() {
        assert!(!form_ready("Trade rumors", ""));
        assert!(!form_ready("Trade rumors", " \n\t"));
    }

    #[test]
    fn titled_post_with_body_is_ready() {
        assert!(form_ready("Trade rumors", "Who says no?"));
    }
}
