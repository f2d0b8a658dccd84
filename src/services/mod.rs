//! 业务能力层
//!
//! 只处理单个题目，不关心层间回退顺序和批次流程

pub mod heuristic;
pub mod llm_service;

pub use llm_service::{LlmService, ModelTier};
