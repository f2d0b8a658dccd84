//! # AI Question Service
//!
//! 批量选择题自动解答服务
//!
//! 接收一批选择题（`POST /ai-solve/`），逐题通过三层回退链选出答案：
//! 主模型 → 备用模型 → 本地猜测，并以 JSON 汇总返回。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 模型客户端，只暴露"调用一次聊天补全"的能力
//! - `OpenAiModelClient` - 生产实现，兼容 OpenAI API 的服务
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个题目
//! - `LlmService` - 用某一层的模型解一道题（提示词 → 调用 → 解析 → 校验）
//! - `heuristic` - 本地猜测能力，不访问网络
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整解答流程
//! - `SolveFlow` - 三层回退编排，首个成功结果短路返回
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量处理，逐条校验、顺序解答、汇总统计
//!
//! ### ⑤ 接入层（Api）
//! - `api/` - HTTP 路由、CORS、错误响应

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ApiError, LlmError};
pub use models::{
    AnswerOption, BatchItemReport, Confidence, ItemStatus, QuestionRecord, Resolution, SolveReply,
};
pub use orchestrator::BatchProcessor;
pub use workflow::SolveFlow;
