//! 声明文件解析器。每种格式一个实现，按扩展名选择。

use std::path::Path;

use brix_errors::BrixResult;

use crate::RawConfig;

mod json;
mod toml;
mod yaml;

pub use self::json::JsonConfigParser;
pub use self::toml::TomlConfigParser;
pub use self::yaml::YamlConfigParser;

/// 所有声明文件解析器必须实现的接口
pub trait ConfigParser: Send + Sync {
    fn parse(&self, contents: &str) -> BrixResult<RawConfig>;

    fn extensions(&self) -> &'static [&'static str];

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions().contains(&ext))
            .unwrap_or(false)
    }
}

/// 解析器列表
pub type ParserList = Vec<Box<dyn ConfigParser>>;

/// 默认启用的全部解析器，YAML优先
pub fn default_parsers() -> ParserList {
    vec![
        Box::new(YamlConfigParser),
        Box::new(TomlConfigParser),
        Box::new(JsonConfigParser),
    ]
}
