//! Board card component

use dioxus::prelude::*;

use dugout_client::Board;

use crate::routes::Route;

/// Props for BoardCard
#[derive(Props, Clone, PartialEq)]
pub struct BoardCardProps {
    pub board: Board,
}

/// Board card linking through to the board's posts
#[component]
pub fn BoardCard(props: BoardCardProps) -> Element {
    let board = &props.board;

    rsx! {
        Link {
            to: Route::BoardPage { board_id: board.board_id.clone() },
            class: "block rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg hover:border-emerald-300 transition-all duration-200",

            div {
                class: "flex items-center gap-3 mb-3",
                div {
                    class: "w-10 h-10 rounded-full bg-emerald-100 text-emerald-700 flex items-center justify-center text-xl",
                    "\u{26BE}"
                }
                h3 {
                    class: "text-lg font-semibold text-gray-900 line-clamp-1",
                    "{board.name}"
                }
            }

            p {
                class: "text-gray-600 text-sm line-clamp-2 mb-4",
                "{board.description}"
            }

            span {
                class: "inline-flex items-center gap-1 text-sm font-medium text-emerald-700",
                "Browse posts"
                span { "\u{2192}" }
            }
        }
    }
}

/// Skeleton loader for boards
#[component]
pub fn BoardCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 animate-pulse",
            div {
                class: "flex items-center gap-3 mb-3",
                div { class: "w-10 h-10 bg-gray-200 rounded-full" }
                div { class: "h-6 w-2/3 bg-gray-200 rounded" }
            }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-4/5 bg-gray-200 rounded" }
            }
            div { class: "h-5 w-28 bg-gray-200 rounded" }
        }
    }
}
