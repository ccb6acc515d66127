//! Landing page

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Page served when no template file is present on disk
const DEFAULT_INDEX: &str = include_str!("../../templates/index.html");

/// GET /
///
/// Serves the configured template, falling back to the built-in page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let path = &state.config().web.index_template;

    match tokio::fs::read_to_string(path).await {
        Ok(page) => Html(page),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = ?path, error = %e, "Failed to read index template");
            }
            Html(DEFAULT_INDEX.to_string())
        }
    }
}
