//! # Brix Config Loader
//!
//! 负责选择声明文件、按扩展名交给对应解析器，并把解析结果
//! 转换为待执行的 [命令](Command) 与参数列表。
//!
//! 同时转出命令执行所需的公共类型，上层只需依赖本crate。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

mod parsers;
mod process;

pub use brix_commands::{
    Command, CopyCommand, ExecCommand, MkdirCommand, ProcessedCommandParams,
    SearchReplaceCommand, TemplateCommand,
};
pub use brix_common::{AppContext, ContextMap};
pub use brix_errors::{BrixError, BrixErrorKind, BrixResult};
pub use parsers::{
    default_parsers, ConfigParser, JsonConfigParser, ParserList, TomlConfigParser,
    YamlConfigParser,
};
pub use process::{command_for, SUPPORTED_COMMANDS};

/// 命令与其渲染后参数的列表，按声明顺序排列
pub type CommandList = Vec<(Box<dyn Command>, ProcessedCommandParams)>;

/// 声明文件的原始结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    pub context: Option<HashMap<String, String>>,
    pub commands: Vec<HashMap<String, RawCommandParams>>,
}

/// 解析器输出的命令参数，所有字段保持声明文件中的原始类型
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCommandParams {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub overwrite: Option<bool>,
    pub search: Option<String>,
    pub replace: Option<String>,
    pub commands: Option<Vec<String>>,
    pub stdout: Option<bool>,
    pub context: Option<HashMap<String, String>>,
}

/// 持有解析器和当前选中的声明文件
pub struct ConfigLoader<'a> {
    parsers: ParserList,
    config_file: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    cli_config: &'a brix_cli::Config,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(parsers: ParserList, cli_config: &'a brix_cli::Config) -> Self {
        Self {
            parsers,
            config_file: None,
            config_dir: None,
            cli_config,
        }
    }

    /// 从候选文件中选出扩展名受支持的声明文件。
    /// 多个候选时通过 `prompter` 让用户选择。
    pub fn load(
        &mut self,
        config_files: Vec<PathBuf>,
        prompter: &dyn brix_cli::Prompter,
    ) -> BrixResult<PathBuf> {
        let first = config_files
            .first()
            .ok_or_else(|| BrixError::not_found("no declaration files to load"))?;
        self.config_dir = first.parent().map(Path::to_path_buf);

        let mut possible: Vec<PathBuf> = config_files
            .iter()
            .filter(|file| self.parsers.iter().any(|parser| parser.matches(file)))
            .cloned()
            .collect();

        if possible.is_empty() {
            return Err(BrixError::UnsupportedExtension {
                extension: first
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_string())
                    .unwrap_or_default(),
            });
        }

        let index = if possible.len() > 1 {
            let names: Vec<String> = possible
                .iter()
                .map(|file| {
                    file.file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| file.display().to_string())
                })
                .collect();
            prompter.select(
                "found multiple config files, which one would you like to use?",
                &names,
            )?
        } else {
            0
        };

        if index >= possible.len() {
            return Err(BrixError::with("no option selected!"));
        }
        let selected = possible.swap_remove(index);
        if let Some(dir) = selected.parent() {
            self.config_dir = Some(dir.to_path_buf());
        }
        info!("选中声明文件: {}", selected.display());
        self.config_file = Some(selected.clone());
        Ok(selected)
    }

    /// 当前选中的声明文件
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// 声明文件所在目录，`source` 相对于它解析
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// 读取并解析选中的声明文件，再交给 [`ConfigLoader::process`] 转换为命令
    pub async fn run(&self, ctx: &AppContext<'_>) -> BrixResult<CommandList> {
        let config = self.read().await?;
        self.process(&config, ctx)
    }

    /// 读取并解析选中的声明文件
    pub async fn read(&self) -> BrixResult<RawConfig> {
        let config_file = self
            .config_file
            .as_ref()
            .ok_or_else(|| BrixError::with("no declaration file has been loaded"))?;

        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.matches(config_file))
            .ok_or_else(|| BrixError::UnsupportedExtension {
                extension: config_file
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_string())
                    .unwrap_or_default(),
            })?;

        debug!("解析声明文件: {}", config_file.display());
        let contents = tokio::fs::read_to_string(config_file).await?;
        parser.parse(&contents)
    }
}
