//! Inertia form handling example
//!
//! Demonstrates redirects after mutations (303 after PUT/DELETE, 302 after
//! POST), external locations, partial reloads and bumping the asset version
//! at runtime.
//!
//! Run with: cargo run --example server_forms
//!
//! Try:
//!   curl -i -X PUT http://localhost:3000/records/1?name=Wish
//!   curl -i -H 'X-Inertia: true' -H 'X-Inertia-Partial-Component: records/Index' \
//!        -H 'X-Inertia-Partial-Data: total' http://localhost:3000/
//!   curl -i -X POST http://localhost:3000/deploy
//!   curl -i -H 'X-Inertia: true' -H 'X-Inertia-Version: 1' http://localhost:3000/

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Router,
};
use inertia_axum::{
    version::SharedVersion, Inertia, InertiaConfig, InertiaError, InertiaLayer, InertiaResponse,
    RenderOptions, SimpleTemplateRenderer,
};
use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    records: Arc<RwLock<BTreeMap<u32, String>>>,
    version: SharedVersion,
}

#[derive(Deserialize)]
struct RecordForm {
    name: String,
}

async fn index(
    State(state): State<AppState>,
    inertia: Inertia,
) -> Result<InertiaResponse, InertiaError> {
    let records = state.records.read();
    let list: Vec<_> = records
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name}))
        .collect();

    inertia.render_with(
        RenderOptions::new("records/Index")
            .with_prop("records", list)
            .with_prop("total", records.len()),
    )
}

async fn create(
    State(state): State<AppState>,
    Query(form): Query<RecordForm>,
    inertia: Inertia,
) -> InertiaResponse {
    let mut records = state.records.write();
    let id = records.keys().next_back().map_or(1, |last| last + 1);
    records.insert(id, form.name);
    tracing::info!(id, "record created");
    inertia.redirect("/")
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(form): Query<RecordForm>,
    inertia: Inertia,
) -> InertiaResponse {
    if let Some(name) = state.records.write().get_mut(&id) {
        *name = form.name;
        tracing::info!(id, "record updated");
    }
    inertia.redirect("/")
}

async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    inertia: Inertia,
) -> InertiaResponse {
    state.records.write().remove(&id);
    tracing::info!(id, "record deleted");
    inertia.redirect("/")
}

async fn docs(inertia: Inertia) -> InertiaResponse {
    inertia.location("https://inertiajs.com/the-protocol")
}

async fn deploy(State(state): State<AppState>, inertia: Inertia) -> InertiaResponse {
    let next = inertia
        .engine()
        .version()
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(1, |v| v + 1);
    state.version.set(next.to_string());
    inertia.redirect("/")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let version = SharedVersion::new("1");
    let state = AppState {
        records: Arc::new(RwLock::new(BTreeMap::from([(1, "Meddle".to_string())]))),
        version: version.clone(),
    };

    let config = InertiaConfig::default()
        .with_version(version)
        .with_template_renderer(SimpleTemplateRenderer::default())
        .with_encrypt_history(true);

    let app = Router::new()
        .route("/", get(index))
        .route("/records", post(create))
        .route("/records/{id}", put(update).delete(destroy))
        .route("/docs", get(docs))
        .route("/deploy", post(deploy))
        .with_state(state)
        .layer(InertiaLayer::from_config(config)?);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
