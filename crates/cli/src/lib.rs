//! # Brix CLI
//!
//! 命令行相关的一切：[clap](https://crates.io/crates/clap) 参数定义、运行期 [`Config`]、
//! 交互式提示、终端输出、日志初始化与 shell 补全脚本。

mod args;
pub mod completions;
mod config;
pub mod logging;
pub mod print;
pub mod select;

pub use args::Cli;
pub use completions::write_completions;
pub use brix_errors::{BrixError, BrixErrorKind, BrixResult};
pub use config::{Config, LogFormat, LogLevel};
pub use logging::init_logging;
pub use print::{display_path, Reporter};
pub use select::{Prompter, TerminalPrompter};
