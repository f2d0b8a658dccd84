//! HTTP 路由与处理器
//!
//! 对外只有一个业务端点 `POST /ai-solve/`，
//! 另提供 `GET /health` 用于存活检查和累计统计。
//! CORS 对所有响应（含预检和错误响应）生效

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{QuestionRecord, SolveReply};
use crate::orchestrator::BatchProcessor;

/// 共享应用状态
pub struct AppState {
    pub processor: BatchProcessor,
}

/// 构建路由
///
/// 允许任意来源，方法 POST/OPTIONS，
/// 请求头 Content-Type / X-CSRFToken / Accept
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-csrftoken"),
        ]);

    Router::new()
        .route("/ai-solve/", post(solve_questions))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// 批量解题端点
///
/// 请求体必须是非空的 JSON 数组；逐条缺失由批处理降级，
/// 整体格式错误在这里以 400 拒绝
async fn solve_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<QuestionRecord>>, JsonRejection>,
) -> Result<Json<SolveReply>, ApiError> {
    let Json(records) = payload.map_err(|e| {
        warn!("⚠️ 请求体格式无效: {}", e);
        ApiError::BadRequest(format!("invalid request body: {}", e))
    })?;

    if records.is_empty() {
        warn!("⚠️ 收到空的题目数组");
        return Err(ApiError::BadRequest("empty question array".to_string()));
    }

    info!("📥 收到 {} 道题目", records.len());

    let reports = state.processor.process_batch(&records).await;

    Ok(Json(SolveReply::from_reports(reports)))
}

/// 存活检查，附带跨请求累计统计
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let flow = state.processor.flow();
    Json(json!({
        "status": "ok",
        "total_questions": flow.total_questions(),
        "success_count": flow.success_count(),
    }))
}

/// 启动 HTTP 服务
pub async fn serve(config: &Config, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("🚀 服务已启动，监听 {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
