//! OpenAI 兼容模型客户端
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::clients::traits::{CompletionRequest, ModelClient};
use crate::config::Config;
use crate::error::LlmError;

/// OpenAI 兼容客户端
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiModelClient {
    /// 根据配置创建客户端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!("调用 LLM API，模型: {}", request.model);
        debug!("用户消息长度: {} 字符", request.user.len());

        let api_failed = |e: async_openai::error::OpenAIError| LlmError::ApiCallFailed {
            model: request.model.clone(),
            source: Box::new(e),
        };

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system.as_str())
            .build()
            .map_err(api_failed)?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user.as_str())
            .build()
            .map_err(api_failed)?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(api_failed)?;

        let response = self.client.chat().create(chat_request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::ApiCallFailed {
                model: request.model.clone(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyContent {
                model: request.model.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}
