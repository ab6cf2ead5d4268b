//! Moderation verdict banner

use dioxus::prelude::*;

/// How strongly the banner should read.
///
/// Both severities mean the content was not published; `Rejected` is an
/// explicit verdict, `Caution` covers everything else that withheld
/// publication.
#[derive(Clone, Copy, PartialEq)]
pub enum AlertSeverity {
    Rejected,
    Caution,
}

/// Props for ModerationAlert
#[derive(Props, Clone, PartialEq)]
pub struct ModerationAlertProps {
    pub severity: AlertSeverity,
    pub title: String,
    pub detail: String,
    pub on_dismiss: EventHandler<MouseEvent>,
}

/// Dismissible banner explaining why content was not published
#[component]
pub fn ModerationAlert(props: ModerationAlertProps) -> Element {
    let styles = get_severity_styles(props.severity);

    rsx! {
        div {
            class: "flex items-start gap-3 border {styles.border} {styles.bg} p-4 rounded-lg",
            role: "alert",

            span { class: "text-xl", "{styles.icon}" }

            div {
                class: "flex-1",
                h4 { class: "font-semibold {styles.title_text}", "{props.title}" }
                p { class: "text-sm {styles.body_text} mt-1", "{props.detail}" }
            }

            button {
                r#type: "button",
                class: "{styles.body_text} hover:opacity-70 transition-opacity text-lg leading-none",
                aria_label: "Dismiss",
                onclick: move |e| props.on_dismiss.call(e),
                "\u{2715}"
            }
        }
    }
}

struct SeverityStyles {
    bg: &'static str,
    border: &'static str,
    title_text: &'static str,
    body_text: &'static str,
    icon: &'static str,
}

fn get_severity_styles(severity: AlertSeverity) -> SeverityStyles {
    match severity {
        AlertSeverity::Rejected => SeverityStyles {
            bg: "bg-red-50",
            border: "border-red-200",
            title_text: "text-red-800",
            body_text: "text-red-700",
            icon: "\u{1F6AB}",
        },
        AlertSeverity::Caution => SeverityStyles {
            bg: "bg-amber-50",
            border: "border-amber-200",
            title_text: "text-amber-800",
            body_text: "text-amber-700",
            icon: "\u{26A0}\u{FE0F}",
        },
    }
}
