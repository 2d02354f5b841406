//! # Brix Processor
//!
//! 对 [handlebars](https://crates.io/crates/handlebars) 的封装，
//! 负责上下文的构建与自定义helper的注册。

use std::collections::HashMap;

use handlebars::{Handlebars, Helper, JsonRender, RenderError};
use serde_json::value::{Map, Value as Json};
use tracing::trace;

use brix_errors::BrixResult;

mod helpers;

pub use helpers::java_package_segments;

/// 模板上下文类型
pub type ProcessorContext = Map<String, Json>;

/// 持有注册好helper的handlebars实例
pub struct ProcessorCore {
    handlebars: Handlebars<'static>,
}

impl ProcessorCore {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        // 生成的是源代码而不是HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("to-upper", Box::new(helpers::ToUpperHelper));
        handlebars.register_helper("to-lower", Box::new(helpers::ToLowerHelper));
        handlebars.register_helper("to-title", Box::new(helpers::ToTitleHelper));
        handlebars.register_helper("to-case", Box::new(helpers::ToCaseHelper));
        handlebars.register_helper("to-flat", Box::new(helpers::ToFlatHelper));
        handlebars.register_helper("to-java-package", Box::new(helpers::ToJavaPackageHelper));
        handlebars.register_helper(
            "to-java-package-path",
            Box::new(helpers::ToJavaPackagePathHelper),
        );
        Self { handlebars }
    }

    /// 使用给定上下文渲染文本
    pub fn process(&self, text: &str, context: &ProcessorContext) -> BrixResult<String> {
        trace!("渲染模板, 长度={}", text.len());
        let result = self.handlebars.render_template(text, context)?;
        Ok(result)
    }

    /// 递归渲染JSON值中的每一个字符串，对象的键保持不变
    pub fn process_value(&self, value: &Json, context: &ProcessorContext) -> BrixResult<Json> {
        match value {
            Json::String(text) => Ok(Json::String(self.process(text, context)?)),
            Json::Array(items) => items
                .iter()
                .map(|item| self.process_value(item, context))
                .collect::<BrixResult<Vec<_>>>()
                .map(Json::Array),
            Json::Object(fields) => {
                let mut processed = Map::new();
                for (key, field) in fields {
                    processed.insert(key.clone(), self.process_value(field, context)?);
                }
                Ok(Json::Object(processed))
            }
            other => Ok(other.clone()),
        }
    }
}

impl Default for ProcessorCore {
    fn default() -> Self {
        Self::new()
    }
}

/// 把字符串映射序列化为模板上下文
pub fn create_context(data: HashMap<String, String>) -> ProcessorContext {
    data.into_iter()
        .map(|(key, value)| (key, Json::String(value)))
        .collect()
}

/// 取helper的第一个参数并渲染为字符串
fn first_param(h: &Helper<'_, '_>) -> Result<String, RenderError> {
    let param = h.param(0).ok_or_else(|| {
        RenderError::new("this function requires an argument to process")
    })?;
    Ok(param.value().render())
}
