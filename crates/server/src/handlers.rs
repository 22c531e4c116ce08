use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Deserialize;
use tokio::task;
use tracing::{info, warn};

use mediashelf_core::render_tree;
use mediashelf_models::AggregateCounts;

use crate::assets::{CLIENT_SCRIPT, STYLE_SHEET};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub(crate) struct InfoRequest {
    pub path: String,
}

/// `GET /` — the full listing document, or a plain-text "not initialized"
/// body when startup configuration has not completed.
pub(crate) async fn list_library(State(state): State<SharedState>) -> Response {
    let Some(library) = state.library.clone() else {
        return "not initialized\n".into_response();
    };

    let rendered =
        task::spawn_blocking(move || render_tree(&library.root, &library.extensions)).await;
    let (tree, counts) = match rendered {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(error = %err, "listing render task failed");
            (html! { ul {} }, AggregateCounts::default())
        }
    };

    info!(files = counts.files, videos = counts.videos, "rendered library listing");
    page(&tree).into_response()
}

fn page(tree: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { "Mediashelf: media directory listing" }
                style { (PreEscaped(STYLE_SHEET)) }
                script { (PreEscaped(CLIENT_SCRIPT)) }
            }
            body {
                (tree)
            }
        }
    }
}

/// `POST /info` — runs the external inspection command against the `path`
/// form field and returns its captured output verbatim. Inspector failures
/// degrade to an empty body; the condition is logged, not surfaced.
pub(crate) async fn media_info(
    State(state): State<SharedState>,
    Form(request): Form<InfoRequest>,
) -> Response {
    match state.inspector.inspect(&request.path).await {
        Ok(text) => text.into_response(),
        Err(err) => {
            warn!(path = %request.path, error = %err, "metadata inspection failed");
            String::new().into_response()
        }
    }
}

/// Any non-POST method on `/info`; the external command is never invoked.
pub(crate) async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed").into_response()
}
