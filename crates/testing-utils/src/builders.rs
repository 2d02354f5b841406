//! 测试数据构建器

use std::path::{Path, PathBuf};

use brix_cli::Config;

/// 构建测试用的 [`Config`]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config {
                language: "java".to_string(),
                config_name: "controller".to_string(),
                project: "shop".to_string(),
                module: "orders".to_string(),
                ..Config::default()
            },
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.config.language = language.to_string();
        self
    }

    pub fn with_config_name(mut self, config_name: &str) -> Self {
        self.config.config_name = config_name.to_string();
        self
    }

    pub fn with_project(mut self, project: &str) -> Self {
        self.config.project = project.to_string();
        self
    }

    pub fn with_module(mut self, module: &str) -> Self {
        self.config.module = module.to_string();
        self
    }

    pub fn with_workdir(mut self, workdir: impl AsRef<Path>) -> Self {
        self.config.workdir = workdir.as_ref().to_path_buf();
        self
    }

    pub fn with_config_dir(mut self, config_dir: impl AsRef<Path>) -> Self {
        self.config.config_dir = Some(config_dir.as_ref().to_path_buf());
        self
    }

    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.config.home_dir = Some(home_dir.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
