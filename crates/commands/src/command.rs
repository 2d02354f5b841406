//! 命令接口与覆盖写入协议。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::{BrixError, BrixResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 经过模板渲染后的命令参数，各命令只取自己需要的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedCommandParams {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub overwrite: Option<bool>,
    pub search: Option<String>,
    pub replace: Option<String>,
    pub commands: Option<Vec<String>>,
    pub stdout: Option<bool>,
    pub context: Option<HashMap<String, String>>,
}

/// 所有命令的统一接口
#[async_trait]
pub trait Command: Send + Sync {
    async fn run(&self, pcp: ProcessedCommandParams, ctx: &AppContext<'_>) -> BrixResult<()>;

    fn name(&self) -> String;
}

/// 会写入目标路径的命令参数
pub trait OverwritableParams {
    fn source(&self) -> &Path;
    fn destination(&self) -> &Path;
    fn overwrite(&self) -> Option<bool>;
}

/// 目标路径的写入决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    Write,
    Skip,
    Ask,
}

impl WriteDecision {
    /// 显式覆盖或目标不存在时直接写入；显式不覆盖且目标存在时跳过；其余情况询问用户
    pub fn decide(overwrite: Option<bool>, destination_exists: bool) -> Self {
        match (overwrite, destination_exists) {
            (Some(true), _) | (_, false) => WriteDecision::Write,
            (Some(false), true) => WriteDecision::Skip,
            (None, true) => WriteDecision::Ask,
        }
    }
}

/// 需要遵守覆盖协议的命令。
/// 实现该trait即自动获得 [`Command`] 实现。
#[async_trait]
pub trait OverwritableCommand: Send + Sync {
    type Params: OverwritableParams + Send + 'static;

    fn name_inner(&self) -> String;

    /// 校验并提取参数
    fn from(&self, pcp: ProcessedCommandParams) -> BrixResult<Self::Params>;

    /// 执行写入，`destination` 已相对工作目录解析
    async fn write_impl(
        &self,
        params: Self::Params,
        destination: &Path,
        ctx: &AppContext<'_>,
    ) -> BrixResult<()>;
}

#[async_trait]
impl<T> Command for T
where
    T: OverwritableCommand,
{
    async fn run(&self, pcp: ProcessedCommandParams, ctx: &AppContext<'_>) -> BrixResult<()> {
        let params = self.from(pcp)?;

        if !params.source().exists() {
            return Err(BrixError::not_found(format!(
                "source '{}' does not exist",
                params.source().display()
            )));
        }

        let destination = ctx.config.workdir.join(params.destination());
        if let Some(parent) = destination.parent() {
            if !parent.exists() {
                debug!("creating directory '{}'", parent.display());
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    BrixError::with(format!("unable to create '{}': {e}", parent.display()))
                })?;
            }
        }

        let decision = WriteDecision::decide(params.overwrite(), destination.exists());
        let write = match decision {
            WriteDecision::Write => true,
            WriteDecision::Skip => false,
            WriteDecision::Ask => ctx
                .prompter
                .confirm(&format!("overwrite '{}'", destination.display()))?,
        };

        if write {
            info!("writing: '{}'", destination.display());
            self.write_impl(params, &destination, ctx).await
        } else {
            info!("skipping: '{}'", destination.display());
            Ok(())
        }
    }

    fn name(&self) -> String {
        self.name_inner()
    }
}

/// 收集缺失的必填字段
#[derive(Debug, Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub(crate) fn field<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    pub(crate) fn into_error(self) -> BrixError {
        BrixError::validation(self.missing)
    }
}
