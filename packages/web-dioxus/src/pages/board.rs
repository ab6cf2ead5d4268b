//! Board detail page component

use dioxus::prelude::*;

use dugout_client::{Board, Post};

use crate::components::{PostCard, PostCardSkeleton};
use crate::routes::Route;

/// Board page - the board's posts, newest first
#[component]
pub fn BoardPage(board_id: String) -> Element {
    let board = use_server_future({
        let board_id = board_id.clone();
        move || fetch_board(board_id.clone())
    })?;
    let posts = use_server_future({
        let board_id = board_id.clone();
        move || fetch_board_posts(board_id.clone())
    })?;

    let board_value = match board.value().read().as_ref() {
        Some(Ok(b)) => Some(b.clone()),
        _ => None,
    };
    let post_list = match posts.value().read().as_ref() {
        Some(Ok(p)) => p.clone(),
        _ => vec![],
    };

    let is_loading = posts.value().read().is_none();
    let error = posts
        .value()
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().err().map(|e| e.to_string()));

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-3xl mx-auto px-4 py-8",
                    Link {
                        to: Route::Home {},
                        class: "text-emerald-600 hover:text-emerald-700 text-sm mb-4 inline-block",
                        "\u{2190} All boards"
                    }
                    div {
                        class: "flex items-start justify-between gap-4",
                        div {
                            h1 {
                                class: "text-3xl font-bold text-gray-900 mb-2",
                                if let Some(b) = &board_value {
                                    "{b.name}"
                                } else {
                                    "Board"
                                }
                            }
                            if let Some(b) = &board_value {
                                p { class: "text-gray-600", "{b.description}" }
                            }
                        }
                        Link {
                            to: Route::NewPostPage { board_id: board_id.clone() },
                            class: "shrink-0 inline-flex items-center gap-2 px-4 py-2 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium",
                            span { "\u{270F}\u{FE0F}" }
                            "New Post"
                        }
                    }
                }
            }

            // Posts
            main {
                class: "max-w-3xl mx-auto px-4 py-8",

                if is_loading {
                    div {
                        class: "space-y-4",
                        for i in 0..4 {
                            PostCardSkeleton { key: "{i}" }
                        }
                    }
                } else if let Some(err) = error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load posts" }
                        p { class: "text-gray-500", "{err}" }
                    }
                } else if post_list.is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No posts yet" }
                        p {
                            class: "text-gray-500 mb-6 max-w-md mx-auto",
                            "Nobody has stepped up to the plate. Start the conversation!"
                        }
                        Link {
                            to: Route::NewPostPage { board_id: board_id.clone() },
                            class: "inline-flex items-center gap-2 px-6 py-3 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 transition-colors font-medium",
                            "Write the first post"
                        }
                    }
                } else {
                    div {
                        class: "space-y-4",
                        for post in post_list {
                            PostCard { key: "{post.post_id}", post: post.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Server function to fetch one board
#[server]
async fn fetch_board(board_id: String) -> Result<Board, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .boards()
        .get_board(&board_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Server function to fetch a board's posts
#[server]
async fn fetch_board_posts(board_id: String) -> Result<Vec<Post>, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .boards()
        .list_posts(&board_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
