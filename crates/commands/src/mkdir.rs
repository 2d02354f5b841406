//! [MkdirCommand]

use std::path::PathBuf;

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::BrixResult;
use tracing::debug;

use crate::command::{Command, ProcessedCommandParams, Required};

#[derive(Debug, Clone, PartialEq)]
pub struct MkdirParams {
    destination: PathBuf,
}

impl MkdirParams {
    fn validate(pcp: ProcessedCommandParams) -> BrixResult<Self> {
        let mut required = Required::default();
        match required.field("destination", pcp.destination) {
            Some(destination) => Ok(Self { destination }),
            None => Err(required.into_error()),
        }
    }
}

/// 在工作目录下创建目录，缺失的上级目录一并创建
#[derive(Debug, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for MkdirCommand {
    async fn run(&self, pcp: ProcessedCommandParams, ctx: &AppContext<'_>) -> BrixResult<()> {
        let params = MkdirParams::validate(pcp)?;
        let destination = ctx.config.workdir.join(params.destination);

        debug!("creating directory '{}'", destination.display());
        tokio::fs::create_dir_all(destination).await?;
        Ok(())
    }

    fn name(&self) -> String {
        String::from("mkdir")
    }
}
