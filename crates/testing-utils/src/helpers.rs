//! 基于临时目录的测试环境

use std::fs;
use std::path::{Path, PathBuf};

use brix_cli::Config;
use tempfile::TempDir;

use crate::builders::ConfigBuilder;

/// 一个临时工作目录，测试结束时自动删除
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// 写入文件，必要时创建父目录
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    pub fn mkdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.join(relative)).expect("failed to read file")
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }

    /// 以该目录为工作目录的默认配置
    pub fn config(&self) -> Config {
        ConfigBuilder::new().with_workdir(self.path()).build()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
