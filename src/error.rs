use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// LLM 层错误
///
/// 全部在所属解答层内部消化并转换为 `Resolution::Failed`，
/// 绝不越过层边界向上抛出
#[derive(Debug, Error)]
pub enum LlmError {
    /// API 调用失败（网络、鉴权、限流等）
    #[error("LLM API 调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 调用超时
    #[error("LLM 调用超时 (模型: {model}, {seconds} 秒)")]
    Timeout { model: String, seconds: u64 },
    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 响应中不包含可解析的数字答案
    #[error("无法从 LLM 响应中解析答案 (响应: {response})")]
    AnswerParseFailed { response: String },
    /// 答案编号不在本题的选项范围内
    #[error("LLM 返回的答案 {answer} 不在有效选项中")]
    InvalidAnswer { answer: String },
}

/// HTTP 层错误
///
/// 唯一允许把错误暴露给调用方的边界，统一序列化为 `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求格式错误（非 JSON、非数组、空数组）
    #[error("{0}")]
    BadRequest(String),
    /// 未预期的内部错误
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
