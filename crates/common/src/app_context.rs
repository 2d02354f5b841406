use std::sync::Arc;

use brix_cli::{Config, Prompter};
use brix_processor::ProcessorCore;

/// 一次运行的应用上下文，在dispatch阶段创建并以引用传给每个命令
pub struct AppContext<'a> {
    pub processor: ProcessorCore,
    pub config: &'a Config,
    pub prompter: Arc<dyn Prompter>,
}

impl<'a> AppContext<'a> {
    pub fn new(config: &'a Config, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            processor: ProcessorCore::new(),
            config,
            prompter,
        }
    }

    pub fn with_processor(mut self, processor: ProcessorCore) -> Self {
        self.processor = processor;
        self
    }
}
