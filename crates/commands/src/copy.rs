//! [CopyCommand]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::BrixResult;
use tracing::debug;
use walkdir::WalkDir;

use crate::command::{OverwritableCommand, OverwritableParams, ProcessedCommandParams, Required};

#[derive(Debug, Clone, PartialEq)]
pub struct CopyParams {
    source: PathBuf,
    destination: PathBuf,
    overwrite: Option<bool>,
}

impl OverwritableParams for CopyParams {
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

/// 复制文件；源为目录时递归复制整棵目录树
#[derive(Debug, Default)]
pub struct CopyCommand;

impl CopyCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OverwritableCommand for CopyCommand {
    type Params = CopyParams;

    fn name_inner(&self) -> String {
        String::from("copy")
    }

    fn from(&self, pcp: ProcessedCommandParams) -> BrixResult<CopyParams> {
        let mut required = Required::default();
        let source = required.field("source", pcp.source);
        let destination = required.field("destination", pcp.destination);

        match (source, destination) {
            (Some(source), Some(destination)) => Ok(CopyParams {
                source,
                destination,
                overwrite: pcp.overwrite,
            }),
            _ => Err(required.into_error()),
        }
    }

    async fn write_impl(
        &self,
        params: CopyParams,
        destination: &Path,
        _ctx: &AppContext<'_>,
    ) -> BrixResult<()> {
        debug!(
            "copying '{}' to '{}'",
            params.source.display(),
            destination.display()
        );

        if !params.source.is_dir() {
            tokio::fs::copy(&params.source, destination).await?;
            return Ok(());
        }

        let entries = WalkDir::new(&params.source)
            .sort_by_file_name()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        for entry in entries {
            let relative = entry
                .path()
                .strip_prefix(&params.source)
                .unwrap_or_else(|_| entry.path());
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                tokio::fs::create_dir_all(&target).await?;
            } else {
                debug!("copying '{}'", entry.path().display());
                tokio::fs::copy(entry.path(), &target).await?;
            }
        }
        Ok(())
    }
}
