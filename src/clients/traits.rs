use async_trait::async_trait;

use crate::error::LlmError;

/// 一次聊天补全调用的参数
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// 模型名称
    pub model: String,
    /// 系统指令
    pub system: String,
    /// 用户提示词
    pub user: String,
    /// 解码温度
    pub temperature: f32,
    /// 输出 token 上限（只期望一个很短的编号）
    pub max_tokens: u32,
}

/// 聊天补全客户端能力
///
/// 生产实现为 `OpenAiModelClient`，测试中用脚本化的 mock 替换
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// 发起一次补全调用，返回模型的原始文本输出
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
