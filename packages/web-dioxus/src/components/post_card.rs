//! Post card component

use dioxus::prelude::*;

use dugout_client::Post;

/// Props for PostCard
#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

/// Post card displaying a single published post
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;

    rsx! {
        article {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-md transition-all duration-200",

            h3 {
                class: "text-lg font-semibold text-gray-900 mb-2 line-clamp-2",
                "{post.title}"
            }

            p {
                class: "text-gray-700 text-sm mb-4 line-clamp-3 whitespace-pre-line",
                "{post.content}"
            }

            div {
                class: "pt-3 border-t border-gray-200/60",
                p {
                    class: "text-xs text-gray-400",
                    "Posted {format_time_ago(post.created_at)}"
                }
            }
        }
    }
}

/// Skeleton loader for posts
#[component]
pub fn PostCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div { class: "h-6 w-3/4 bg-gray-200 rounded mb-3" }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-5/6 bg-gray-200 rounded" }
                div { class: "h-4 w-2/3 bg-gray-200 rounded" }
            }
            div {
                class: "pt-3 border-t border-gray-100",
                div { class: "h-3 w-24 bg-gray-200 rounded" }
            }
        }
    }
}

fn format_time_ago(epoch_seconds: i64) -> String {
    let Some(date) = chrono::DateTime::from_timestamp(epoch_seconds, 0) else {
        return "Recently".to_string();
    };

    let now = chrono::Utc::now();
    let diff = now.signed_duration_since(date);

    let days = diff.num_days();
    if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        format!("{} months ago", days / 30)
    }
}
