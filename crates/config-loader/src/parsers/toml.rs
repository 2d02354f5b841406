//! TOML声明文件解析器

use brix_errors::BrixResult;

use super::ConfigParser;
use crate::RawConfig;

/// `.toml`
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigParser;

impl ConfigParser for TomlConfigParser {
    fn parse(&self, contents: &str) -> BrixResult<RawConfig> {
        let config: RawConfig = ::toml::from_str(contents)?;
        Ok(config)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["toml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config = TomlConfigParser
            .parse(
                r#"
[context]
author = "brix"

[[commands]]
[commands.exec]
commands = ["echo one", "echo two"]
stdout = false

[[commands]]
[commands.search_replace]
destination = "Cargo.toml"
search = "a"
replace = "b"
"#,
            )
            .unwrap();

        assert_eq!(config.context.unwrap()["author"], "brix");
        assert_eq!(config.commands.len(), 2);
        let exec = &config.commands[0]["exec"];
        assert_eq!(exec.commands.as_ref().unwrap().len(), 2);
        assert_eq!(exec.stdout, Some(false));
        assert!(config.commands[1].contains_key("search_replace"));
    }
}
