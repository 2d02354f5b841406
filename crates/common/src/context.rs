//! 模板上下文的分层与合并。

use std::collections::HashMap;

use tracing::trace;

/// 当前使用的上下文类型
pub type StdContext = HashMap<String, String>;

/// 命令可见的全部上下文层
#[derive(Debug, Clone, Default)]
pub struct ContextMap {
    pub cli_positional: StdContext,
    pub config_global: StdContext,
    pub command_local: StdContext,
}

impl ContextMap {
    /// 按优先级合并：命令局部 > 声明全局 > 命令行位置参数
    pub fn do_merge(&self) -> StdContext {
        let mut merged = StdContext::new();
        for layer in [&self.cli_positional, &self.config_global, &self.command_local] {
            for (key, value) in layer {
                merged.insert(key.clone(), value.clone());
            }
        }
        trace!("合并后的上下文: {:?}", merged);
        merged
    }
}

/// 由命令行参数创建初始上下文
pub fn cli_config_to_map(config: &brix_cli::Config) -> StdContext {
    let mut map = StdContext::new();
    map.insert("language".to_string(), config.language.clone());
    map.insert("config_name".to_string(), config.config_name.clone());
    map.insert("project".to_string(), config.project.clone());
    map.insert("module".to_string(), config.module.clone());
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> StdContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_local_overrides_global_overrides_cli() {
        let map = ContextMap {
            cli_positional: ctx(&[("module", "cli"), ("project", "shop")]),
            config_global: ctx(&[("module", "global"), ("author", "brix")]),
            command_local: ctx(&[("module", "local")]),
        };
        let merged = map.do_merge();
        assert_eq!(merged["module"], "local");
        assert_eq!(merged["project"], "shop");
        assert_eq!(merged["author"], "brix");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_empty_layers() {
        assert!(ContextMap::default().do_merge().is_empty());
    }

    #[test]
    fn test_cli_config_to_map() {
        let config = brix_cli::Config {
            language: "java".to_string(),
            config_name: "controller".to_string(),
            project: "shop".to_string(),
            module: "orders".to_string(),
            ..brix_cli::Config::default()
        };
        let map = cli_config_to_map(&config);
        assert_eq!(map["language"], "java");
        assert_eq!(map["config_name"], "controller");
        assert_eq!(map["project"], "shop");
        assert_eq!(map["module"], "orders");
    }
}
