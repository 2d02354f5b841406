//! JSON声明文件解析器

use brix_errors::BrixResult;

use super::ConfigParser;
use crate::RawConfig;

/// `.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigParser;

impl ConfigParser for JsonConfigParser {
    fn parse(&self, contents: &str) -> BrixResult<RawConfig> {
        let config: RawConfig = serde_json::from_str(contents)?;
        Ok(config)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }
}
