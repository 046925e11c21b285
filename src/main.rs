use anyhow::Result;
use leetcode_autosubmit::utils::logging;
use leetcode_autosubmit::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let summary = App::initialize(config).await?.run().await?;

    logging::print_run_summary(&summary);

    Ok(())
}
