use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::{delete, get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::todo::TodoId;
use crate::repo::TodoRepository;
use crate::view;

pub type SharedRepo = Arc<Mutex<dyn TodoRepository + Send>>;

/// Handle to the one store instance; handlers never hold the lock across an
/// await point.
#[derive(Clone)]
pub struct AppState {
    repo: SharedRepo,
}

impl AppState {
    pub fn new(repo: SharedRepo) -> Self {
        Self { repo }
    }

    fn repo(&self) -> MutexGuard<'_, dyn TodoRepository + Send + 'static> {
        self.repo.lock().expect("todo store mutex poisoned")
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/toggle/{id}", post(toggle_todo))
        .route("/todos/{id}", delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("shutting down");
}

async fn index() -> Html<String> {
    Html(view::page())
}

async fn list_todos(State(state): State<AppState>) -> Html<String> {
    Html(view::render_list(&state.repo().all()))
}

#[derive(Deserialize)]
struct CreateTodo {
    #[serde(default)]
    text: String,
}

async fn create_todo(
    State(state): State<AppState>,
    Form(body): Form<CreateTodo>,
) -> Html<String> {
    match state.repo().add(&body.text) {
        Ok(todo) => Html(view::render_item(&todo)),
        Err(_) => Html(view::render_error("Text is required")),
    }
}

async fn toggle_todo(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let Some(id) = parse_id(&id) else {
        return Html(String::new());
    };
    match state.repo().toggle(id) {
        Ok(todo) => Html(view::render_item(&todo)),
        Err(_) => Html(String::new()),
    }
}

async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let Some(id) = parse_id(&id) else {
        return Html(String::new());
    };
    match state.repo().remove(id) {
        Ok(remaining) => Html(view::render_list(&remaining)),
        Err(_) => Html(String::new()),
    }
}

// Ids arrive as raw path segments; anything that does not parse names no
// task, so the handler answers with the same empty no-op as an unknown id.
fn parse_id(raw: &str) -> Option<TodoId> {
    raw.parse().ok()
}
