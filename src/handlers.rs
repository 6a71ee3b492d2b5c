use crate::errors::AppError;
use crate::models::{SelectRequest, SelectionResponse};
use crate::state::AppState;
use crate::storage::persist_selection;
use crate::ui::{render_index, render_results};
use axum::{
    Form, Json,
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use serde_json::json;
use tracing::info;

/// Page load: fetch for the current selection, then render the whole page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    // one snapshot, so the active button matches the user whose data is shown
    let selection = state.selection.lock().await.clone();
    let results = state.loader.reload(selection.current()).await;
    Html(render_index(&selection, &results))
}

pub async fn results(State(state): State<AppState>) -> Html<String> {
    Html(render_results(&state.loader.snapshot().await))
}

pub async fn select(
    State(state): State<AppState>,
    Form(payload): Form<SelectRequest>,
) -> Result<Redirect, AppError> {
    apply_selection(&state, &payload.user).await?;
    Ok(Redirect::to("/"))
}

pub async fn api_select(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let user = apply_selection(&state, &payload.user).await?;
    state.loader.spawn(user.clone()).await;

    Ok(Json(SelectionResponse {
        user,
        status: state.loader.snapshot().await.label().to_string(),
    }))
}

pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let user = state.selection.lock().await.current().to_string();
    Json(SelectionResponse {
        user,
        status: state.loader.snapshot().await.label().to_string(),
    })
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn apply_selection(state: &AppState, user: &str) -> Result<String, AppError> {
    let mut selection = state.selection.lock().await;
    let mut next = selection.clone();
    next.select(user)?;
    let user = next.current().to_string();

    // memory only follows once the file agrees
    persist_selection(&state.data_path, &user).await?;
    *selection = next;
    info!(user = %user, "selection changed");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StatusClient;
    use crate::loader::Loader;
    use crate::selection::SelectionController;
    use std::path::PathBuf;

    fn state_at(data_path: PathBuf) -> AppState {
        let users = vec!["josip".to_string(), "ana".to_string()];
        let selection = SelectionController::new(&users, None, "josip");
        let client = StatusClient::new("http://127.0.0.1:9", None).unwrap();
        AppState::new(data_path, selection, Loader::new(client))
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_selection() {
        let state = state_at(PathBuf::from("/nonexistent_store_status_dir/sub/state.json"));

        let err = apply_selection(&state, "ana").await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.starts_with("could not save selection"));

        let selection = state.selection.lock().await;
        assert_eq!(selection.current(), "josip");
        assert_eq!(selection.active_user(), Some("josip"));
    }

    #[tokio::test]
    async fn saved_selection_updates_memory_and_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("store_status_handlers_{}.json", std::process::id()));
        let state = state_at(path.clone());

        assert_eq!(apply_selection(&state, "ana").await.unwrap(), "ana");
        assert_eq!(state.selection.lock().await.active_user(), Some("ana"));
        let stored = crate::storage::load_preferences(&path).await;
        assert_eq!(stored.selected_user.as_deref(), Some("ana"));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn page_highlights_the_user_it_loaded_for() {
        let state = state_at(std::env::temp_dir().join("store_status_handlers_unused.json"));

        let Html(page) = index(State(state)).await;
        assert_eq!(page.matches("toggle-btn active").count(), 1);
        assert!(page.contains(r#"class="toggle-btn active" name="user" value="josip""#));
        assert!(page.contains(r#"<div class="error">"#));
    }
}
