//! # brix-common
//!
//! 命令执行期间共享的对象：
//! - [`AppContext`]：一次运行中所有命令共用的处理器、配置与交互接口
//! - [`context`]：多层模板上下文的合并

mod app_context;
pub mod context;

pub use app_context::AppContext;
pub use context::{cli_config_to_map, ContextMap, StdContext};
