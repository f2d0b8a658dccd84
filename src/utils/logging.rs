//! 日志初始化
//!
//! 同时输出到控制台和日志文件，级别由 `RUST_LOG` 控制（默认 info）

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// 初始化日志：控制台层 + 非阻塞文件层
///
/// 返回的 guard 必须由调用方持有到进程结束，否则文件日志会丢失
pub fn init(log_file: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}

/// 记录启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 AI 解题服务启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "📊 主模型: {} / 备用模型: {}",
        config.primary_model_name, config.secondary_model_name
    );
    info!("🌐 监听地址: {}", config.bind_addr);
    info!("{}", "=".repeat(60));
}
