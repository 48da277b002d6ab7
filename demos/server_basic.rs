//! Basic Inertia server example
//!
//! Serves a records index as a full HTML page on first visit and as JSON on
//! Inertia visits.
//!
//! Run with: cargo run --example server_basic
//!
//! Try:
//!   curl -i http://localhost:3000/
//!   curl -i -H 'X-Inertia: true' http://localhost:3000/
//!   curl -i -H 'X-Inertia: true' -H 'X-Inertia-Version: old' http://localhost:3000/

use axum::{routing::get, Router};
use inertia_axum::{
    Inertia, InertiaConfig, InertiaError, InertiaLayer, InertiaResponse, SimpleTemplateRenderer,
};
use serde::Serialize;

#[derive(Serialize)]
struct Record {
    id: u32,
    name: &'static str,
}

#[derive(Serialize)]
struct IndexProps {
    records: Vec<Record>,
}

async fn index(inertia: Inertia) -> Result<InertiaResponse, InertiaError> {
    let props = IndexProps {
        records: vec![
            Record { id: 1, name: "Meddle" },
            Record { id: 2, name: "Animals" },
        ],
    };
    tracing::info!(inertia = inertia.is_inertia(), "rendering records index");
    inertia.render_props("records/Index", &props)
}

async fn back_home(inertia: Inertia) -> InertiaResponse {
    inertia.redirect("/")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = InertiaConfig::default()
        .with_version(|| "1".to_string())
        .with_template_renderer(SimpleTemplateRenderer::default());

    let app = Router::new()
        .route("/", get(index))
        .route("/redirect", get(back_home))
        .layer(InertiaLayer::from_config(config)?);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
