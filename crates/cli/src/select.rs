//! 交互式提示：选择列表与确认。

use dialoguer::console::Term;
use dialoguer::{Confirm, Select};
use tracing::debug;

use crate::{BrixError, BrixResult};

/// 需要用户参与决策的交互接口。
/// 运行期使用 [`TerminalPrompter`]，测试中可替换为脚本化实现。
pub trait Prompter: Send + Sync {
    /// 从 `items` 中选择一项，返回其下标
    fn select(&self, prompt: &str, items: &[String]) -> BrixResult<usize>;

    /// 询问是/否，默认否
    fn confirm(&self, prompt: &str) -> BrixResult<bool>;
}

/// 基于 `dialoguer` 的终端提示
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> BrixResult<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on_opt(&self.term)?;

        match selection {
            Some(index) => Ok(index),
            None => {
                debug!("用户取消了选择: {}", prompt);
                Err(BrixError::with("no option selected!"))
            }
        }
    }

    fn confirm(&self, prompt: &str) -> BrixResult<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_on(&self.term)?;
        debug!("确认 `{}`: {}", prompt, answer);
        Ok(answer)
    }
}
