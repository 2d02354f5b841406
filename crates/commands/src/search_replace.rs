//! [SearchReplaceCommand]

use std::path::PathBuf;

use async_trait::async_trait;
use brix_common::AppContext;
use brix_errors::{BrixError, BrixResult};
use fancy_regex::Regex;
use tracing::info;

use crate::command::{Command, ProcessedCommandParams, Required};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReplaceParams {
    destination: PathBuf,
    search: String,
    replace: String,
}

impl SearchReplaceParams {
    fn validate(pcp: ProcessedCommandParams) -> BrixResult<Self> {
        let mut required = Required::default();
        let destination = required.field("destination", pcp.destination);
        let search = required.field("search", pcp.search);
        let replace = required.field("replace", pcp.replace);

        match (destination, search, replace) {
            (Some(destination), Some(search), Some(replace)) => Ok(Self {
                destination,
                search,
                replace,
            }),
            _ => Err(required.into_error()),
        }
    }
}

/// 在目标文件中按正则替换全部匹配，支持前后断言
#[derive(Debug, Default)]
pub struct SearchReplaceCommand;

impl SearchReplaceCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for SearchReplaceCommand {
    async fn run(&self, pcp: ProcessedCommandParams, ctx: &AppContext<'_>) -> BrixResult<()> {
        let params = SearchReplaceParams::validate(pcp)?;
        let destination = ctx.config.workdir.join(&params.destination);

        info!("reading to string from '{}'", destination.display());
        let data = tokio::fs::read_to_string(&destination)
            .await
            .map_err(|e| {
                BrixError::with(format!(
                    "unable to read file '{}': {e}",
                    destination.display()
                ))
            })?;

        info!("creating regex '{}'", params.search);
        let re = Regex::new(&params.search)?;
        let result = re.replace_all(&data, params.replace.as_str());

        info!("writing changes");
        tokio::fs::write(&destination, result.as_bytes())
            .await
            .map_err(|e| {
                BrixError::with(format!(
                    "unable to write to file '{}': {e}",
                    destination.display()
                ))
            })?;
        Ok(())
    }

    fn name(&self) -> String {
        String::from("search and replace")
    }
}
