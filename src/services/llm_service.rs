//! LLM 解答服务 - 业务能力层
//!
//! 只负责"用某一个模型解一道题"：
//! 构建提示词 → 调用模型 → 提取数字 → 校验选项。
//! 主模型层和备用模型层是同一段代码，仅 [`ModelTier`] 参数不同

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use tracing::{info, warn};

use crate::clients::{CompletionRequest, ModelClient};
use crate::error::LlmError;
use crate::models::{Confidence, QuestionRecord, Resolution};

/// 一个解答层的模型参数
#[derive(Debug, Clone)]
pub struct ModelTier {
    /// 模型名称
    pub model: String,
    /// 解码温度
    pub temperature: f32,
    /// 输出 token 上限
    pub max_tokens: u32,
    /// 该层结果的置信度标签
    pub confidence: Confidence,
    /// 该层结果的来源标签
    pub source: &'static str,
}

impl ModelTier {
    /// 主模型层：温度 0（确定性解码），输出上限 5 token
    pub fn primary(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.0,
            max_tokens: 5,
            confidence: Confidence::High,
            source: "primary-model",
        }
    }

    /// 备用模型层：温度接近 0，输出上限 3 token
    pub fn secondary(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.1,
            max_tokens: 3,
            confidence: Confidence::Medium,
            source: "secondary-model",
        }
    }
}

/// LLM 解答服务
pub struct LlmService {
    client: Arc<dyn ModelClient>,
    timeout: Duration,
}

impl LlmService {
    /// 创建解答服务
    pub fn new(client: Arc<dyn ModelClient>, timeout_secs: u64) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// 用指定层的模型解一道题
    ///
    /// 所有失败（网络、超时、解析、校验）都折叠为 `Resolution::Failed`，
    /// 绝不向上抛出
    pub async fn resolve_with_tier(
        &self,
        record: &QuestionRecord,
        tier: &ModelTier,
    ) -> Resolution {
        match self.try_resolve(record, tier).await {
            Ok(answer) => {
                info!("✓ 模型解答成功 (模型: {}, 答案: {})", tier.model, answer);
                Resolution::Solved {
                    answer,
                    confidence: tier.confidence,
                    source: tier.source.to_string(),
                }
            }
            Err(e) => {
                warn!("⚠️ 模型解答失败 (模型: {}): {}", tier.model, e);
                Resolution::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn try_resolve(
        &self,
        record: &QuestionRecord,
        tier: &ModelTier,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: tier.model.clone(),
            system: build_system_prompt(),
            user: build_user_prompt(record),
            temperature: tier.temperature,
            max_tokens: tier.max_tokens,
        };

        let response = match tokio::time::timeout(self.timeout, self.client.complete(&request)).await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(LlmError::Timeout {
                    model: tier.model.clone(),
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        let answer = extract_first_number(&response).ok_or_else(|| LlmError::AnswerParseFailed {
            response: response.clone(),
        })?;

        // 答案编号必须是本题某个选项的 position
        if !record.answers.iter().any(|opt| opt.position == answer) {
            return Err(LlmError::InvalidAnswer { answer });
        }

        Ok(answer)
    }
}

/// 构建系统指令
///
/// 要求模型只返回选项编号：数学题先计算，逻辑题先推理，
/// 知识题按事实选择
fn build_system_prompt() -> String {
    "你是一个专业的选择题解答助手。你的任务：\n\
     1. 仔细阅读并分析题目\n\
     2. 逐一评估每个选项\n\
     3. 选出最正确的答案\n\
     4. 只返回选项编号（1、2、3、4、5）\n\
     5. 不要输出任何其他文字，只返回编号\n\n\
     如果是数学题，先进行计算\n\
     如果是逻辑题，先进行推理\n\
     如果是知识题，选择最符合事实的选项"
        .to_string()
}

/// 构建题目提示词（题干 + 按输入顺序编号的选项列表）
fn build_user_prompt(record: &QuestionRecord) -> String {
    let options_text = record
        .answers
        .iter()
        .map(|opt| format!("选项 {}: {}", opt.position, opt.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "请选出下面这道题的最佳答案：\n\n题目: {}\n\n选项:\n{}\n\n正确答案编号:",
        record.question, options_text
    )
}

/// 提取响应中第一段连续数字
fn extract_first_number(response: &str) -> Option<String> {
    let re = Regex::new(r"\d+").ok()?;
    re.find(response).map(|m| m.as_str().to_string())
}
