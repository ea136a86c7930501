//! REST API server
//!
//! Thin axum adapter over the analyzer and the feedback stub.
//!
//! Endpoints:
//!   GET  /health
//!   GET  /analyzers
//!   POST /analyze   {filename, source_text} -> AnalysisReport
//!   POST /review    {filename, source_text} -> {analysis, suggestions, score, report}

use anyhow::Result;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::analyzer::Analyzer;
use crate::feedback::FeedbackGenerator;
use crate::models::AnalysisReport;

pub struct AppContext {
    pub analyzer: Analyzer,
    pub feedback: FeedbackGenerator,
}

impl AppContext {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            feedback: FeedbackGenerator::new(),
        }
    }
}

pub async fn serve(addr: SocketAddr, ctx: Arc<AppContext>) -> Result<()> {
    let router = build_router(ctx);

    info!("review API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyzers", get(list_analyzers))
        .route("/analyze", post(analyze))
        .route("/review", post(review))
        .with_state(ctx)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    pub source_text: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub score: f64,
    pub report: AnalysisReport,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "pr-review-agent",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_analyzers() -> Json<Value> {
    Json(json!({
        "analyzers": ["static_analysis", "feedback", "github_client"],
    }))
}

async fn analyze(
    State(ctx): State<Arc<AppContext>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisReport> {
    Json(ctx.analyzer.analyze(&req.filename, &req.source_text))
}

async fn review(
    State(ctx): State<Arc<AppContext>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<ReviewResponse> {
    let report = ctx.analyzer.analyze(&req.filename, &req.source_text);
    Json(ReviewResponse {
        analysis: ctx.feedback.generate_feedback(&report),
        suggestions: ctx.feedback.suggest_improvements(&report),
        score: ctx.feedback.score(&report),
        report,
    })
}
