use std::sync::Arc;

use anyhow::Result;

use ai_question_service::api::{self, AppState};
use ai_question_service::clients::OpenAiModelClient;
use ai_question_service::orchestrator::BatchProcessor;
use ai_question_service::utils::logging;
use ai_question_service::workflow::SolveFlow;
use ai_question_service::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env（不存在时忽略）
    let _ = dotenvy::dotenv();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志（guard 需存活到进程结束）
    let _log_guard = logging::init(&config.log_file);

    logging::log_startup(&config);

    // 组装解答链：OpenAI 客户端 → 回退流程 → 批处理器
    let client = Arc::new(OpenAiModelClient::new(&config));
    let flow = SolveFlow::new(&config, client);
    let processor = BatchProcessor::new(flow, config.question_preview_len);
    let state = Arc::new(AppState { processor });

    // 启动 HTTP 服务
    api::serve(&config, state).await
}
