//! 解答回退链 - 流程层
//!
//! 核心职责：定义"一道题"的完整解答流程
//!
//! 流程顺序：
//! 1. 主模型（高置信度）
//! 2. 备用模型（中置信度）
//! 3. 本地猜测（低置信度，兜底）
//!
//! 首个成功结果短路返回；每层只尝试一次，层内不重试

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::clients::ModelClient;
use crate::config::Config;
use crate::models::{QuestionRecord, Resolution};
use crate::services::{heuristic, LlmService, ModelTier};

/// 解答流程
///
/// - 编排三层回退，不持有任何网络资源
/// - 持有两个跨请求累计的统计计数器，仅用于观测，不参与控制流
pub struct SolveFlow {
    llm_service: LlmService,
    primary_tier: ModelTier,
    secondary_tier: ModelTier,
    total_questions: AtomicU64,
    success_count: AtomicU64,
}

impl SolveFlow {
    /// 创建解答流程
    pub fn new(config: &Config, client: Arc<dyn ModelClient>) -> Self {
        Self {
            llm_service: LlmService::new(client, config.llm_timeout_secs),
            primary_tier: ModelTier::primary(&config.primary_model_name),
            secondary_tier: ModelTier::secondary(&config.secondary_model_name),
            total_questions: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
        }
    }

    /// 解一道题：主模型 → 备用模型 → 本地猜测
    pub async fn resolve_question(&self, record: &QuestionRecord) -> Resolution {
        let result = self.run_chain(record).await;

        self.total_questions.fetch_add(1, Ordering::Relaxed);
        if matches!(result, Resolution::Solved { .. }) {
            self.success_count.fetch_add(1, Ordering::Relaxed);
        }

        result
    }

    async fn run_chain(&self, record: &QuestionRecord) -> Resolution {
        // ========== 第 1 层: 主模型 ==========
        let primary = self
            .llm_service
            .resolve_with_tier(record, &self.primary_tier)
            .await;
        if let Resolution::Solved { .. } = primary {
            return primary;
        }

        warn!("主模型失败，尝试备用模型...");

        // ========== 第 2 层: 备用模型 ==========
        let secondary = self
            .llm_service
            .resolve_with_tier(record, &self.secondary_tier)
            .await;
        if let Resolution::Solved { .. } = secondary {
            return secondary;
        }

        warn!("备用模型失败，使用本地猜测...");

        // ========== 第 3 层: 本地猜测 ==========
        heuristic::guess(&record.question, &record.answers)
    }

    /// 累计处理过的题目数
    pub fn total_questions(&self) -> u64 {
        self.total_questions.load(Ordering::Relaxed)
    }

    /// 累计解出的题目数
    pub fn success_count(&self) -> u64 {
        self.success_count.load(Ordering::Relaxed)
    }
}
