//! Shell 补全脚本生成，由构建脚本在编译期写入 `OUT_DIR`。

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::args::Cli;
use crate::BrixResult;

pub const BIN_NAME: &str = "brix";

/// 生成补全脚本的 shell
pub const COMPLETION_SHELLS: [Shell; 3] = [Shell::Bash, Shell::Fish, Shell::PowerShell];

/// 将每种 shell 的补全脚本写入 `out_dir`，返回生成的文件路径
pub fn write_completions(out_dir: &Path) -> BrixResult<Vec<PathBuf>> {
    let mut command = Cli::command();
    COMPLETION_SHELLS
        .iter()
        .map(|shell| -> BrixResult<PathBuf> {
            Ok(clap_complete::generate_to(*shell, &mut command, BIN_NAME, out_dir)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_completions_for_every_shell() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let files = write_completions(temp_dir.path()).unwrap();
        assert_eq!(files.len(), COMPLETION_SHELLS.len());

        for file in &files {
            assert!(file.starts_with(temp_dir.path()));
            let script = std::fs::read_to_string(file).unwrap();
            assert!(script.contains(BIN_NAME), "{} 中缺少命令名", file.display());
            assert!(script.contains("config-dir"), "{} 中缺少 --config-dir", file.display());
        }
    }

    #[test]
    fn test_completion_file_names() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let names: Vec<String> = write_completions(temp_dir.path())
            .unwrap()
            .iter()
            .filter_map(|f| f.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        assert!(names.contains(&"brix.bash".to_string()));
        assert!(names.contains(&"brix.fish".to_string()));
        assert!(names.contains(&"_brix.ps1".to_string()));
    }

    #[test]
    fn test_missing_out_dir_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = write_completions(&missing).unwrap_err();
        assert_eq!(err.kind(), crate::BrixErrorKind::Io);
    }
}
