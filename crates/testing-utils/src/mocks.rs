//! 交互接口的测试替身

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use brix_cli::{BrixError, BrixResult, Prompter};

/// 按预设脚本应答的 [`Prompter`]，同时记录收到的提示
#[derive(Debug, Clone, Default)]
pub struct MockPrompter {
    selections: Arc<Mutex<VecDeque<usize>>>,
    confirmations: Arc<Mutex<VecDeque<bool>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(self, selections: Vec<usize>) -> Self {
        self.selections.lock().unwrap().extend(selections);
        self
    }

    pub fn with_confirmations(self, confirmations: Vec<bool>) -> Self {
        self.confirmations.lock().unwrap().extend(confirmations);
        self
    }

    /// 迄今收到的全部提示文本
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn record(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

impl Prompter for MockPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> BrixResult<usize> {
        self.record(prompt);
        let index = self
            .selections
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BrixError::with(format!("unexpected selection prompt: {prompt}")))?;
        if index >= items.len() {
            return Err(BrixError::with(format!(
                "scripted selection {index} out of range for {} items",
                items.len()
            )));
        }
        Ok(index)
    }

    fn confirm(&self, prompt: &str) -> BrixResult<bool> {
        self.record(prompt);
        self.confirmations
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BrixError::with(format!("unexpected confirmation prompt: {prompt}")))
    }
}

/// 任何提示都视为错误的 [`Prompter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompter;

impl Prompter for NoPrompter {
    fn select(&self, prompt: &str, _items: &[String]) -> BrixResult<usize> {
        Err(BrixError::with(format!("unexpected selection prompt: {prompt}")))
    }

    fn confirm(&self, prompt: &str) -> BrixResult<bool> {
        Err(BrixError::with(format!("unexpected confirmation prompt: {prompt}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_prompter_replays_script() {
        let prompter = MockPrompter::new()
            .with_selections(vec![1])
            .with_confirmations(vec![true, false]);
        let items = vec!["a".to_string(), "b".to_string()];

        assert_eq!(prompter.select("pick", &items).unwrap(), 1);
        assert!(prompter.confirm("first?").unwrap());
        assert!(!prompter.confirm("second?").unwrap());
        assert!(prompter.confirm("third?").is_err());
        assert_eq!(prompter.prompt_count(), 4);
    }

    #[test]
    fn test_mock_prompter_rejects_out_of_range() {
        let prompter = MockPrompter::new().with_selections(vec![3]);
        assert!(prompter.select("pick", &["only".to_string()]).is_err());
    }

    #[test]
    fn test_no_prompter() {
        assert!(NoPrompter.confirm("overwrite?").is_err());
    }
}
