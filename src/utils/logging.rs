/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::models::ProgressRecord;
use crate::orchestrator::{RunSummary, StopReason};
use crate::workflow::AttemptCtx;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 配置
/// - `record`: 已加载的进度
pub fn log_startup(config: &Config, record: &ProgressRecord) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 自动提交模式");
    info!("📊 题号范围: 1-{}", config.max_problem);
    info!(
        "📁 进度文件: {} (已记录 {} 题，成功 {} 题)",
        config.progress_file,
        record.len(),
        record.completed_count()
    );
    info!("{}", "=".repeat(60));
}

/// 记录单题尝试开始
pub fn log_attempt_start(ctx: &AttemptCtx) {
    info!("\n{}", "─".repeat(30));
    info!("{} 🔎 开始尝试", ctx);
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
pub fn print_run_summary(summary: &RunSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("尝试题目: {}", summary.attempts);
    info!("跳过: {}", summary.skipped);
    info!("被拦截: {}", summary.blocked);
    match summary.stop {
        StopReason::Submitted(id) => info!("🎉 成功提交题目 #{}", id),
        StopReason::NoCandidate => info!("ℹ️ 没有可做的新题目"),
        StopReason::TooManyBlocks => {
            warn!("⚠️ 多次被拦截，已提前结束。请稍后再试或更新登录凭据")
        }
        StopReason::AttemptLimit => warn!("⚠️ 达到尝试上限仍未成功，请查看跳过日志"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
