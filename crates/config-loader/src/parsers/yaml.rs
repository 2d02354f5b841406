//! YAML声明文件解析器

use brix_errors::BrixResult;

use super::ConfigParser;
use crate::RawConfig;

/// `.yaml` 与 `.yml`
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigParser;

const SUPPORTED_EXTENSIONS: &[&str] = &["yaml", "yml"];

impl ConfigParser for YamlConfigParser {
    fn parse(&self, contents: &str) -> BrixResult<RawConfig> {
        let config: RawConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    fn extensions(&self) -> &'static [&'static str] {
        SUPPORTED_EXTENSIONS
    }
}
