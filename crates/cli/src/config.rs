//! 运行期配置 [`Config`] 及日志相关的枚举。

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use path_clean::PathClean;
use tracing::debug;

use crate::args::Cli;
use crate::BrixError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Off => write!(f, "off"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// brix生命周期中使用的核心配置。
/// 主要来自命令行参数，另外补充了工作目录和用户主目录。
#[derive(Debug, Clone)]
pub struct Config {
    pub language: String,
    pub config_name: String,
    pub project: String,
    pub module: String,

    pub config_dir: Option<PathBuf>,
    pub workdir: PathBuf,
    pub home_dir: Option<PathBuf>,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Config {
    /// 根据用户主目录和解析后的命令行参数创建配置
    pub fn new(home_dir: Option<PathBuf>, cli: Cli) -> Result<Self, BrixError> {
        let workdir = absolute_workdir(cli.workdir.as_deref())?;
        debug!("工作目录: {}", workdir.display());

        Ok(Self {
            language: cli.language,
            config_name: cli.config_name,
            project: cli.project,
            module: cli.module,
            config_dir: cli.config_dir,
            workdir,
            home_dir,
            log_level: cli.log_level,
            log_format: cli.log_format,
        })
    }
}

/// 相对路径基于当前目录补全为绝对路径，并消去 `.` 与 `..`
fn absolute_workdir(workdir: Option<&Path>) -> Result<PathBuf, BrixError> {
    let path = match workdir {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => current_dir()?.join(path),
        None => current_dir()?,
    };
    Ok(path.clean())
}

fn current_dir() -> Result<PathBuf, BrixError> {
    std::env::current_dir().map_err(|e| {
        BrixError::with(format!(
            "Something went wrong. Your current working directory is invalid.\n\
             This is either due to the directory being deleted or insufficient permissions. ({e})"
        ))
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: String::new(),
            config_name: String::new(),
            project: String::new(),
            module: String::new(),
            config_dir: None,
            workdir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            home_dir: None,
            log_level: LogLevel::Off,
            log_format: LogFormat::Compact,
        }
    }
}

impl Display for Config {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[LANGUAGE: {}, CONFIG_NAME: {}, PROJECT: {}, MODULE: {}, CONFIG_DIR: {:?}]",
            self.language, self.config_name, self.project, self.module, self.config_dir
        )
    }
}
