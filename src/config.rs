/// 服务配置
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP 监听地址
    pub bind_addr: String,
    /// 日志文件
    pub log_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    /// 主模型（第一层，能力最强）
    pub primary_model_name: String,
    /// 备用模型（第二层，更便宜更快）
    pub secondary_model_name: String,
    /// 单次 LLM 调用超时（秒）
    pub llm_timeout_secs: u64,
    /// 响应中题干回显的最大字符数
    pub question_preview_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            log_file: "ai_question_service.log".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            primary_model_name: "gpt-4".to_string(),
            secondary_model_name: "gpt-3.5-turbo".to_string(),
            llm_timeout_secs: 30,
            question_preview_len: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(default.bind_addr),
            log_file: std::env::var("LOG_FILE").unwrap_or(default.log_file),
            llm_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            primary_model_name: std::env::var("PRIMARY_MODEL_NAME").unwrap_or(default.primary_model_name),
            secondary_model_name: std::env::var("SECONDARY_MODEL_NAME").unwrap_or(default.secondary_model_name),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_timeout_secs),
            question_preview_len: std::env::var("QUESTION_PREVIEW_LEN").ok().and_then(|v| v.parse().ok()).unwrap_or(default.question_preview_len),
        }
    }
}
