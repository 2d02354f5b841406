//! [ExecCommand]

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::{BrixError, BrixResult};
use tokio::process::Command as ShellCommand;
use tracing::{error, info, trace};

use crate::command::{Command, ProcessedCommandParams, Required};

#[derive(Debug, Clone, PartialEq)]
pub struct ExecParams {
    commands: Vec<String>,
    stdout: bool,
}

impl ExecParams {
    fn validate(pcp: ProcessedCommandParams) -> BrixResult<Self> {
        let mut required = Required::default();
        let commands = required.field(
            "commands",
            pcp.commands.filter(|commands| !commands.is_empty()),
        );

        match commands {
            Some(commands) => Ok(Self {
                commands,
                stdout: pcp.stdout.unwrap_or(true),
            }),
            None => Err(required.into_error()),
        }
    }
}

/// 依次在工作目录中通过系统shell执行命令，遇到非零退出即停止
#[derive(Debug, Default)]
pub struct ExecCommand;

impl ExecCommand {
    pub fn new() -> Self {
        Self
    }
}

fn shell(command: &str, workdir: &Path) -> ShellCommand {
    let mut cmd = if cfg!(windows) {
        let mut cmd = ShellCommand::new("cmd");
        cmd.arg("/C");
        cmd
    } else {
        let mut cmd = ShellCommand::new("sh");
        cmd.arg("-c");
        cmd
    };
    cmd.arg(command)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

#[async_trait]
impl Command for ExecCommand {
    async fn run(&self, pcp: ProcessedCommandParams, ctx: &AppContext<'_>) -> BrixResult<()> {
        let params = ExecParams::validate(pcp)?;

        for command in &params.commands {
            info!("[[ {} ]]", command);
            let output = shell(command, &ctx.config.workdir)
                .output()
                .await
                .map_err(|e| BrixError::execution(format!("failed to run '{command}': {e}")))?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            if params.stdout {
                println!("{stdout}");
            } else {
                trace!("{}", stdout);
            }

            if !output.status.success() {
                error!("[[ {} ]] exited with {}", command, output.status);
                let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
                let message = if stderr.is_empty() {
                    format!("'{command}' exited with {}", output.status)
                } else {
                    stderr
                };
                return Err(BrixError::execution(message));
            }
        }
        Ok(())
    }

    fn name(&self) -> String {
        String::from("exec")
    }
}
