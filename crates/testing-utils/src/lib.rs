//! # Brix Testing Utils
//!
//! 工作区共享的测试工具：
//!
//! - **Mock Prompter**: 按脚本应答的交互实现，替代终端提示
//! - **Config Builder**: 带合理默认值的 [`brix_cli::Config`] 构建器
//! - **Test Workspace**: 基于临时目录的文件读写辅助
//!
//! ## Usage
//!
//! ```toml
//! [dev-dependencies]
//! brix-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;
