use std::process;

use anyhow::{Context, Result};
use brix_cli::{cli_error, init_logging, Cli, Config};
use brix_dispatch::Dispatcher;
use clap::Parser;
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    // 参数错误由clap直接输出并以退出码2结束
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        cli_error!("{err:#}");
        process::exit(2);
    }
}

/// brix的生命周期：
/// 1. 由命令行参数、工作目录和用户主目录构建运行配置
/// 2. 初始化日志
/// 3. 查找、加载声明文件并依次执行其中的命令
async fn run(cli: Cli) -> Result<()> {
    let home_dir = dirs::home_dir();
    let config =
        Config::new(home_dir, cli).context("failed to build the runtime configuration")?;

    init_logging(config.log_level, config.log_format).context("failed to initialise logging")?;
    debug!("运行配置: {}", config);

    let report = Dispatcher::interactive(&config).run().await?;

    info!(
        "声明文件 {} 执行完成: {} 个命令, 耗时 {:?}",
        report.config_file.display(),
        report.executed.len(),
        report.elapsed
    );
    Ok(())
}
