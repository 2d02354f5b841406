//! # Brix Commands
//!
//! 声明文件中可用的命令。每个命令接收已渲染的 [`ProcessedCommandParams`]，
//! 校验自己需要的字段后在工作目录中执行。
//!
//! | 名称 | 作用 |
//! |---|---|
//! | `copy` | 复制文件或目录 |
//! | `exec` | 通过shell执行命令 |
//! | `mkdir` | 创建目录 |
//! | `search_replace` | 正则搜索替换 |
//! | `template` | 渲染模板并写入目标 |

mod command;
mod copy;
mod exec;
mod mkdir;
mod search_replace;
mod template;

pub use command::{
    Command, OverwritableCommand, OverwritableParams, ProcessedCommandParams, WriteDecision,
};
pub use copy::{CopyCommand, CopyParams};
pub use exec::{ExecCommand, ExecParams};
pub use mkdir::{MkdirCommand, MkdirParams};
pub use search_replace::{SearchReplaceCommand, SearchReplaceParams};
pub use template::{TemplateCommand, TemplateParams};
