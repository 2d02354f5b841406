//! 一次运行的调度：查找、加载、处理并依次执行命令。

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use brix_cli::{display_path, Config, Prompter, Reporter, TerminalPrompter};
use brix_config_loader::{
    default_parsers, AppContext, BrixError, BrixResult, ConfigLoader, ParserList,
};
use brix_processor::ProcessorCore;
use tracing::{debug, error, info};

use crate::discovery::modules_from_config;

/// 一次成功运行的结果
#[derive(Debug, Clone)]
pub struct DispatchReport {
    /// 实际使用的声明文件
    pub config_file: PathBuf,
    /// 按执行顺序排列的命令名
    pub executed: Vec<String>,
    pub elapsed: Duration,
}

/// 调度器
pub struct Dispatcher<'a> {
    config: &'a Config,
    parsers: ParserList,
    processor: ProcessorCore,
    prompter: Arc<dyn Prompter>,
    reporter: Reporter,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a Config, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            config,
            parsers: default_parsers(),
            processor: ProcessorCore::new(),
            prompter,
            reporter: Reporter::new(),
        }
    }

    /// 使用终端交互的调度器
    pub fn interactive(config: &'a Config) -> Self {
        Self::new(config, Arc::new(TerminalPrompter::new()))
    }

    pub fn with_parsers(mut self, parsers: ParserList) -> Self {
        self.parsers = parsers;
        self
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// 执行完整的生命周期，任一命令失败即停止
    pub async fn run(self) -> BrixResult<DispatchReport> {
        info!("开始调度: {}", self.config);
        debug!("HOME DIR: {:?}", self.config.home_dir);

        let declarations = modules_from_config(self.config)?;
        let mut loader = ConfigLoader::new(self.parsers, self.config);
        let config_file = loader.load(declarations, self.prompter.as_ref())?;
        let shown = display_path(&config_file.to_string_lossy());

        let ctx = AppContext::new(self.config, self.prompter).with_processor(self.processor);

        let start = Instant::now();
        let commands = loader.run(&ctx).await.map_err(|err| {
            BrixError::config_error(format!("Error loading config at '{shown}':\n{err}"))
        })?;

        self.reporter.config(&config_file);

        let mut totals: HashMap<String, usize> = HashMap::new();
        for (command, _) in &commands {
            *totals.entry(command.name()).or_default() += 1;
        }

        let mut ran: HashMap<String, usize> = HashMap::new();
        let mut executed = Vec::with_capacity(commands.len());
        for (command, args) in commands {
            let name = command.name();
            let current = ran.entry(name.clone()).or_default();
            *current += 1;
            let total = totals.get(&name).copied().unwrap_or(*current);

            self.reporter.running(&name, *current, total);
            info!("执行命令: {} ({}/{})", name, current, total);

            if let Err(err) = command.run(args, &ctx).await {
                error!("命令执行失败: {} - {}", name, err);
                return Err(BrixError::command_failed(name, shown, err));
            }
            executed.push(name);
        }

        let elapsed = start.elapsed();
        self.reporter.done(elapsed);
        info!("调度完成: {} 个命令, 耗时 {:?}", executed.len(), elapsed);

        Ok(DispatchReport {
            config_file,
            executed,
            elapsed,
        })
    }
}
