//! 声明文件的查找。
//!
//! 声明文件位于 `<config-root>/<language>/` 下，文件名为
//! `<config_name>.<ext>` 或 `<config_name>.brix.<ext>`。

use std::fs;
use std::path::{Path, PathBuf};

use brix_cli::{display_path, BrixError, BrixResult, Config};
use tracing::debug;

/// 未指定 `--config-dir` 时，在工作目录及其上级目录中查找的相对路径
pub const DEFAULT_CONFIG_ROOT: &str = ".config/brix";

/// 在 `root/relative` 中查找名为 `name` 的声明文件，结果已排序。
/// 目录不存在时返回空列表。
pub fn search_for_module_declarations(
    root: &Path,
    relative: &Path,
    name: &str,
) -> BrixResult<Vec<PathBuf>> {
    let search_path = root.join(relative);
    if !search_path.is_dir() {
        return Ok(Vec::new());
    }

    let brix_name = format!("{name}.brix");
    let mut results = Vec::new();
    for entry in fs::read_dir(&search_path)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem == name || stem == brix_name)
            .unwrap_or(false);
        if matches {
            results.push(path);
        }
    }
    results.sort();

    debug!("在 {} 中找到声明文件: {:?}", search_path.display(), results);
    Ok(results)
}

/// 从工作目录开始逐级向上查找，到达用户主目录后停止。
/// 工作目录不在主目录之下时，最后再检查主目录。
pub fn search_all(relative: &Path, config: &Config) -> BrixResult<Vec<PathBuf>> {
    let home_dir = config.home_dir.as_deref();
    let mut current = Some(config.workdir.as_path());
    let mut visited_home = false;

    while let Some(dir) = current {
        debug!("查找配置目录: {}", dir.display());
        let declarations = search_for_module_declarations(dir, relative, &config.config_name)?;
        if !declarations.is_empty() {
            return Ok(declarations);
        }

        if Some(dir) == home_dir {
            visited_home = true;
            break;
        }
        current = dir.parent();
    }

    match home_dir {
        Some(home) if !visited_home => {
            search_for_module_declarations(home, relative, &config.config_name)
        }
        _ => Ok(Vec::new()),
    }
}

/// 根据配置查找声明文件。
/// 指定了 `config_dir` 时只查找 `workdir/config_dir/<language>`，否则向上逐级查找。
pub fn modules_from_config(config: &Config) -> BrixResult<Vec<PathBuf>> {
    let language_dir = Path::new(&config.language);

    let (declarations, searched) = match &config.config_dir {
        Some(config_dir) => {
            let root = config.workdir.join(config_dir);
            let declarations =
                search_for_module_declarations(&root, language_dir, &config.config_name)?;
            (declarations, root.join(language_dir))
        }
        None => {
            let relative = Path::new(DEFAULT_CONFIG_ROOT).join(language_dir);
            (search_all(&relative, config)?, relative)
        }
    };

    if declarations.is_empty() {
        return Err(BrixError::not_found(format!(
            "Could not find module declaration for '{}' in {}",
            config.config_name,
            display_path(&searched.to_string_lossy())
        )));
    }
    Ok(declarations)
}
