//! [TemplateCommand]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::BrixResult;
use tracing::debug;

use crate::command::{OverwritableCommand, OverwritableParams, ProcessedCommandParams, Required};

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateParams {
    source: PathBuf,
    destination: PathBuf,
    overwrite: Option<bool>,
    context: HashMap<String, String>,
}

impl OverwritableParams for TemplateParams {
    fn source(&self) -> &Path {
        &self.source
    }

    fn destination(&self) -> &Path {
        &self.destination
    }

    fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }
}

/// 用命令上下文渲染源文件并写入目标
#[derive(Debug, Default)]
pub struct TemplateCommand;

impl TemplateCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OverwritableCommand for TemplateCommand {
    type Params = TemplateParams;

    fn name_inner(&self) -> String {
        String::from("template")
    }

    fn from(&self, pcp: ProcessedCommandParams) -> BrixResult<TemplateParams> {
        let mut required = Required::default();
        let source = required.field("source", pcp.source);
        let destination = required.field("destination", pcp.destination);

        match (source, destination) {
            (Some(source), Some(destination)) => Ok(TemplateParams {
                source,
                destination,
                overwrite: pcp.overwrite,
                context: pcp.context.unwrap_or_default(),
            }),
            _ => Err(required.into_error()),
        }
    }

    async fn write_impl(
        &self,
        params: TemplateParams,
        destination: &Path,
        ctx: &AppContext<'_>,
    ) -> BrixResult<()> {
        let contents = tokio::fs::read_to_string(&params.source).await?;

        debug!("templating '{}'", params.source.display());
        let context = brix_processor::create_context(params.context);
        let result = ctx.processor.process(&contents, &context)?;

        tokio::fs::write(destination, result).await?;
        Ok(())
    }
}
