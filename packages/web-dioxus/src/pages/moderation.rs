//! Moderation dashboard - stand-alone check form, statistics, history

use dioxus::prelude::*;

use dugout_client::{
    ContentDraft, ContentType, ModerationStats, ModerationVerdict, VerdictRecord, VerdictResult,
};

use crate::gateways::run_moderation_check;
use crate::routes::Route;

/// Moderation dashboard page
#[component]
pub fn ModerationDashboard() -> Element {
    let stats = use_server_future(fetch_moderation_stats)?;
    let history = use_server_future(fetch_moderation_history)?;

    let stats_value = match stats.value().read().as_ref() {
        Some(Ok(s)) => Some(s.clone()),
        _ => None,
    };
    let history_list = match history.value().read().as_ref() {
        Some(Ok(h)) => h.clone(),
        _ => vec![],
    };
    let history_loading = history.value().read().is_none();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-4xl mx-auto px-4 py-8",
                    Link {
                        to: Route::Home {},
                        class: "text-emerald-600 hover:text-emerald-700 text-sm mb-4 inline-block",
                        "\u{2190} Back to Home"
                    }
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Moderation Dashboard"
                    }
                    p {
                        class: "text-gray-600",
                        "Run a check on any text, and see how the gate has been calling them."
                    }
                }
            }

            main {
                class: "max-w-4xl mx-auto px-4 py-8 space-y-8",

                // Stats Grid
                if let Some(s) = stats_value {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",

                        StatCard {
                            title: "Total Checks",
                            value: format!("{}", s.total_count),
                            icon: "\u{1F9EE}",
                            color: "blue"
                        }
                        StatCard {
                            title: "Approved",
                            value: format!("{}", s.approved_count),
                            icon: "\u{2705}",
                            color: "green"
                        }
                        StatCard {
                            title: "Rejected",
                            value: format!("{}", s.rejected_count),
                            icon: "\u{1F6AB}",
                            color: "red"
                        }
                        StatCard {
                            title: "Approval Rate",
                            value: format!("{:.0}%", s.approval_rate * 100.0),
                            icon: "\u{2696}\u{FE0F}",
                            color: "amber"
                        }
                    }
                }

                CheckForm {}

                // History
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Recent Checks" }

                    if history_loading {
                        div {
                            class: "space-y-3",
                            for i in 0..3 {
                                div { key: "{i}", class: "h-16 bg-gray-100 rounded-lg animate-pulse" }
                            }
                        }
                    } else if history_list.is_empty() {
                        p { class: "text-gray-500 text-sm py-4 text-center", "No checks yet." }
                    } else {
                        div {
                            class: "divide-y divide-gray-100",
                            for record in history_list {
                                HistoryRow { key: "{record.moderation_id}", record: record.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Stand-alone check form: a verdict with no publication attached.
#[component]
fn CheckForm() -> Element {
    let mut content = use_signal(String::new);
    let mut content_type = use_signal(|| ContentType::Post);
    let mut is_checking = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut verdict = use_signal(|| None::<ModerationVerdict>);

    let handle_submit = move |_| {
        if is_checking() || content().trim().is_empty() {
            return;
        }

        let draft = match content_type() {
            ContentType::Post => ContentDraft::post("", content()),
            ContentType::Comment => ContentDraft::comment(content()),
            ContentType::Profile => ContentDraft::profile(content()),
        };

        spawn(async move {
            is_checking.set(true);
            error.set(None);
            verdict.set(None);

            match run_moderation_check(draft).await {
                Ok(v) => verdict.set(Some(v)),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_checking.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Check Content" }

            form {
                class: "space-y-4",
                onsubmit: handle_submit,

                // Content type selector
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Content Type"
                    }
                    select {
                        value: "{content_type().as_str()}",
                        onchange: move |e| {
                            if let Some(t) = ContentType::from_value(&e.value()) {
                                content_type.set(t);
                            }
                        },
                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        for t in ContentType::variants() {
                            option { value: "{t.as_str()}", "{t.label()}" }
                        }
                    }
                }

                // Content field
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Content"
                    }
                    textarea {
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                        placeholder: "Paste the text you want checked...",
                        rows: "5",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500 resize-none",
                    }
                }

                button {
                    r#type: "submit",
                    class: "w-full py-2 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_checking() || content().trim().is_empty(),
                    if is_checking() { "Checking..." } else { "Run Moderation Check" }
                }
            }

            if let Some(err) = error() {
                div {
                    class: "mt-4 bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg text-sm",
                    "{err}"
                }
            }

            if let Some(v) = verdict() {
                div {
                    class: "mt-6 p-4 bg-gray-50 rounded-lg",
                    h3 { class: "text-base font-semibold text-gray-800 mb-3", "Verdict" }
                    div {
                        class: "space-y-2 text-sm",
                        div {
                            class: "flex items-center gap-2",
                            span { class: "font-medium text-gray-700", "Result:" }
                            ResultBadge { result: v.result }
                        }
                        div {
                            span { class: "font-medium text-gray-700", "Reason: " }
                            span { class: "text-gray-600", "{v.reason}" }
                        }
                        div {
                            span { class: "font-medium text-gray-700", "Score: " }
                            span { class: "text-gray-600", {format!("{:.2}", v.score)} }
                        }
                        div {
                            span { class: "font-medium text-gray-700", "ID: " }
                            span { class: "text-gray-600 font-mono text-xs", "{v.moderation_id}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HistoryRowProps {
    record: VerdictRecord,
}

#[component]
fn HistoryRow(props: HistoryRowProps) -> Element {
    let record = &props.record;
    let checked_at = record.created_at_utc().format("%Y-%m-%d %H:%M");

    rsx! {
        div {
            class: "py-3 flex items-start gap-4",
            ResultBadge { result: record.result }
            div {
                class: "flex-1 min-w-0",
                p { class: "text-sm text-gray-800 line-clamp-2", "{record.content}" }
                p { class: "text-xs text-gray-400 mt-1", "{record.reason}" }
            }
            div {
                class: "text-right shrink-0",
                p { class: "text-xs text-gray-500", {format!("score {:.2}", record.score)} }
                p { class: "text-xs text-gray-400 mt-1", "{checked_at}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ResultBadgeProps {
    result: VerdictResult,
}

#[component]
fn ResultBadge(props: ResultBadgeProps) -> Element {
    let (class, label) = match props.result {
        VerdictResult::Approved => ("bg-green-100 text-green-800", "Approved"),
        VerdictResult::Rejected => ("bg-red-100 text-red-800", "Rejected"),
        VerdictResult::Unknown => ("bg-amber-100 text-amber-800", "Held"),
    };

    rsx! {
        span {
            class: "px-2 py-1 rounded text-xs font-medium {class}",
            "{label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "green" => "bg-green-50",
        "red" => "bg-red-50",
        "amber" => "bg-amber-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "green" => "text-green-700",
        "red" => "text-red-700",
        "amber" => "text-amber-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

/// Server function to fetch aggregate moderation statistics
#[server]
async fn fetch_moderation_stats() -> Result<ModerationStats, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .moderation()
        .stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Server function to fetch the moderation history
#[server]
async fn fetch_moderation_history() -> Result<Vec<VerdictRecord>, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .moderation()
        .history()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
