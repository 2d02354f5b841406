//! 把 [`RawConfig`] 转换为命令列表。

use std::collections::HashMap;
use std::path::PathBuf;

use brix_commands::{
    Command, CopyCommand, ExecCommand, MkdirCommand, ProcessedCommandParams,
    SearchReplaceCommand, TemplateCommand,
};
use brix_common::context::{cli_config_to_map, ContextMap};
use brix_common::AppContext;
use brix_errors::{BrixError, BrixResult};
use tracing::debug;

use crate::{CommandList, ConfigLoader, RawCommandParams, RawConfig};

/// 声明文件中可用的命令名
pub const SUPPORTED_COMMANDS: [&str; 5] = ["copy", "exec", "mkdir", "search_replace", "template"];

/// 按名称（不区分大小写）查找命令
pub fn command_for(name: &str) -> Option<Box<dyn Command>> {
    let command: Box<dyn Command> = match name.to_lowercase().as_str() {
        "copy" => Box::new(CopyCommand::new()),
        "exec" => Box::new(ExecCommand::new()),
        "mkdir" => Box::new(MkdirCommand::new()),
        "search_replace" => Box::new(SearchReplaceCommand::new()),
        "template" => Box::new(TemplateCommand::new()),
        _ => return None,
    };
    Some(command)
}

fn unknown_command(name: &str) -> BrixError {
    let suggestion = difflib::get_close_matches(name, SUPPORTED_COMMANDS.to_vec(), 1, 0.6)
        .first()
        .map(|closest| closest.to_string());
    BrixError::UnknownCommand {
        name: name.to_string(),
        suggestion,
    }
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}

impl<'a> ConfigLoader<'a> {
    /// 将原始声明转换为命令列表
    pub fn process(&self, config: &RawConfig, ctx: &AppContext<'_>) -> BrixResult<CommandList> {
        let mut list = CommandList::new();

        for entry in &config.commands {
            let mut entries = entry.iter();
            let (name, value) = match (entries.next(), entries.next()) {
                (Some(only), None) => only,
                _ => {
                    return Err(BrixError::with(format!(
                        "each command entry must name exactly one command, found {}",
                        entry.len()
                    )))
                }
            };
            let command = command_for(name).ok_or_else(|| unknown_command(name))?;

            let context_map = ContextMap {
                cli_positional: cli_config_to_map(self.cli_config),
                config_global: config.context.clone().unwrap_or_default(),
                command_local: value.context.clone().unwrap_or_default(),
            };
            let context = context_map.do_merge();

            // 上下文的值本身也可以引用上下文，例如 `path: src/{{module}}`
            let raw_context = brix_processor::create_context(context.clone());
            let mut processed_context = HashMap::new();
            for (key, line) in &context {
                processed_context.insert(key.clone(), ctx.processor.process(line, &raw_context)?);
            }

            let json = serde_json::to_value(value)?;
            let rendered = ctx.processor.process_value(
                &json,
                &brix_processor::create_context(processed_context.clone()),
            )?;
            let raw_args: RawCommandParams = serde_json::from_value(rendered)?;

            let mut args = self.create_processed_args(&raw_args);
            args.context = Some(processed_context);

            debug!("命令 {}: {:?}", command.name(), args);
            list.push((command, args));
        }

        Ok(list)
    }

    /// 把原始字段转换为命令期望的类型
    fn create_processed_args(&self, raw: &RawCommandParams) -> ProcessedCommandParams {
        let source = raw.source.as_ref().map(|source| match &self.config_dir {
            Some(dir) => dir.join(source),
            None => PathBuf::from(source),
        });

        ProcessedCommandParams {
            source,
            destination: raw.destination.as_ref().map(PathBuf::from),
            overwrite: raw.overwrite,
            search: raw.search.as_deref().map(unescape),
            replace: raw.replace.as_deref().map(unescape),
            commands: raw.commands.clone(),
            stdout: raw.stdout,
            context: raw.context.clone(),
        }
    }
}
