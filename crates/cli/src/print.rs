//! 终端输出：错误打印宏、路径显示以及运行进度。

use std::path::Path;
use std::time::Duration;

use dialoguer::console::style;

/// 以红色向stderr打印错误信息
#[macro_export]
macro_rules! cli_error {
    ($($arg:tt)*) => {{
        eprintln!("{}", $crate::print::red(&format!($($arg)*)));
    }};
}

#[doc(hidden)]
pub fn red(text: &str) -> String {
    style(text).red().to_string()
}

/// 统一Windows与Unix路径的显示方式
pub fn display_path(path: &str) -> String {
    let path = path.replace("//", "/");
    let path = path.replace("\\\\", "/");
    path.replace('\\', "/")
}

/// 命令执行进度输出
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// 不输出任何内容，用于测试
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn config(&self, path: &Path) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {}",
            style("CONFIG").blue().bright(),
            display_path(&path.to_string_lossy())
        );
    }

    pub fn running(&self, name: &str, current: usize, total: usize) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {} ({}/{})",
            style("RUNNING").green(),
            style(name).bold(),
            current,
            total
        );
    }

    pub fn done(&self, elapsed: Duration) {
        if self.quiet {
            return;
        }
        eprintln!("----------\n{} in {:#?}", style("DONE!").green().bright(), elapsed);
    }
}
