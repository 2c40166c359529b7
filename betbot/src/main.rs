//! Bet tracker bot binary.
//!
//! Stands up the in-memory stores and exposes the command surface over a
//! small HTTP boundary: the chat platform adapter (external) POSTs mention
//! events and slip/projection uploads here and relays the reply text back
//! into the channel.

use anyhow::Result;
use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use betbot::commands::Bot;
use betbot::config;
use betbot::scores::ScoresClient;
use tracker::projections::{PropCategory, PropLine, ProjectionStore};
use tracker::store::{MemoryParlayStore, MemoryWagerStore};

#[derive(Deserialize)]
struct MentionEvent {
    channel: String,
    user: String,
    text: String,
}

#[derive(Deserialize)]
struct SlipEvent {
    channel: String,
    user: String,
    /// OCR-recognized text lines from the slip image.
    lines: Vec<String>,
    stake: Option<String>,
}

#[derive(Deserialize)]
struct PropLineBody {
    player: String,
    category: String,
    line: f64,
}

#[derive(Serialize)]
struct Reply {
    text: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,betbot=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bot = Arc::new(Bot::new(
        Arc::new(MemoryWagerStore::new()),
        Arc::new(MemoryParlayStore::new()),
        Arc::new(ProjectionStore::new()),
        ScoresClient::new(),
    ));

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/events", post(handle_event))
        .route("/slips", post(handle_slip))
        .route("/projections", post(handle_projections))
        .route("/props", post(handle_props))
        .with_state(bot);

    let bind = config::bind_addr();
    info!("betbot listening on http://{}", bind);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn handle_event(State(bot): State<Arc<Bot>>, Json(event): Json<MentionEvent>) -> Json<Reply> {
    let text = bot.handle_mention(&event.channel, &event.user, &event.text).await;
    Json(Reply { text })
}

async fn handle_slip(State(bot): State<Arc<Bot>>, Json(event): Json<SlipEvent>) -> Json<Reply> {
    let text = bot.register_slip(&event.channel, &event.user, &event.lines, event.stake);
    Json(Reply { text })
}

async fn handle_projections(State(bot): State<Arc<Bot>>, body: String) -> Json<Reply> {
    Json(Reply { text: bot.load_projections(&body) })
}

async fn handle_props(
    State(bot): State<Arc<Bot>>,
    Json(props): Json<Vec<PropLineBody>>,
) -> Json<Reply> {
    let props: Vec<PropLine> = props
        .into_iter()
        .filter_map(|p| {
            let category = match p.category.to_lowercase().as_str() {
                "pts" | "points" => PropCategory::Points,
                "ast" | "assists" => PropCategory::Assists,
                "reb" | "rebounds" => PropCategory::Rebounds,
                _ => return None,
            };
            Some(PropLine { player: p.player, category, line: p.line })
        })
        .collect();
    Json(Reply { text: bot.props_report(&props) })
}
