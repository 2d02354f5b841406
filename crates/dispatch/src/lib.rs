//! # Brix Dispatch
//!
//! brix一次运行的完整生命周期：
//! 1. 根据命令行配置查找声明文件（[`discovery`]）
//! 2. 通过 `brix-config-loader` 选择并解析声明文件
//! 3. 创建 [`AppContext`](brix_config_loader::AppContext)
//! 4. 按声明顺序执行命令并输出进度（[`Dispatcher`]）

pub mod discovery;
mod dispatcher;

pub use discovery::{modules_from_config, search_all, search_for_module_declarations};
pub use dispatcher::{DispatchReport, Dispatcher};
