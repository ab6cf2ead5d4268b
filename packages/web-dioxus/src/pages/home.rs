//! Home page component

use dioxus::prelude::*;

use dugout_client::Board;

use crate::components::{BoardCard, BoardCardSkeleton};
use crate::routes::Route;

/// Home page - displays the boards
#[component]
pub fn Home() -> Element {
    // Fetch boards on server and client
    let boards = use_server_future(fetch_boards)?;

    let board_list = match boards.value().read().as_ref() {
        Some(Ok(b)) => b.clone(),
        _ => vec![],
    };

    let is_loading = boards.value().read().is_none();
    let error = boards
        .value()
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().err().map(|e| e.to_string()));

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white",

            // Hero Section
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                            "\u{26BE} Dugout"
                        }
                        p {
                            class: "text-lg sm:text-xl text-gray-600 mb-8",
                            "Talk baseball with fans who care. Every post passes a moderation check before it goes up, so the conversation stays about the game."
                        }

                        Link {
                            to: Route::ModerationDashboard {},
                            class: "inline-flex items-center gap-2 px-6 py-3 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 transition-colors font-medium shadow-sm hover:shadow-md",
                            span { "\u{1F6E1}\u{FE0F}" }
                            "Moderation Dashboard"
                        }
                    }
                }
            }

            // Main Content
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                h2 { class: "text-2xl font-bold text-gray-900 mb-6", "Boards" }

                // Loading State
                if is_loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..6 {
                            BoardCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error State
                else if let Some(err) = error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load boards" }
                        p { class: "text-gray-500 mb-4", "{err}" }
                    }
                }

                // Empty State
                else if board_list.is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No boards yet" }
                        p {
                            class: "text-gray-500 max-w-md mx-auto",
                            "Boards show up here once the server has some. Check back soon."
                        }
                    }
                }

                // Boards Grid
                else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for board in board_list {
                            BoardCard { key: "{board.board_id}", board: board.clone() }
                        }
                    }
                }
            }

            // Footer
            footer {
                class: "bg-white border-t border-gray-100 mt-12",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                    div {
                        class: "text-center",
                        h2 { class: "text-lg font-semibold text-gray-900 mb-2", "Dugout" }
                        p {
                            class: "text-gray-500 text-sm max-w-md mx-auto",
                            "A community forum for baseball fans. Moderated, so every thread stays worth reading."
                        }
                    }
                }
            }
        }
    }
}

/// Server function to fetch the boards
#[server]
async fn fetch_boards() -> Result<Vec<Board>, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .boards()
        .list_boards()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
