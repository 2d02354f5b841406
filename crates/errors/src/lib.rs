//! # Brix Errors
//!
//! 工作区统一的错误类型。各crate通过 `From` 转换把第三方错误
//! （IO、命令行解析、声明文件解析、模板渲染、正则、交互提示）
//! 收敛为 [`BrixError`]。

use std::fmt;

use thiserror::Error;


#[derive(Debug, Error)]
pub enum BrixError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
    #[error("CLI error: {0}")]
    Cli(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Template error: {0}")]
    Template(String),
    #[error("Validation error:{}", missing_fields(.fields))]
    Validation { fields: Vec<String> },
    #[error("Regex error: {0}")]
    Regex(String),
    #[error("Prompt error: {0}")]
    Prompt(String),
    #[error("{0}")]
    NotFound(String),
    #[error("the file extension '.{extension}' is not supported for configs")]
    UnsupportedExtension { extension: String },
    #[error("command '{name}' not found{}", did_you_mean(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<String>,
    },
    #[error("Error running {name} command in '{config}':\n{cause}")]
    CommandFailed {
        name: String,
        config: String,
        cause: Box<BrixError>,
    },
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Execution(String),
    #[error("{0}")]
    Message(String),
}

/// 统一的Result类型
pub type BrixResult<T> = Result<T, BrixError>;

/// 错误的粗粒度分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrixErrorKind {
    Io,
    Cli,
    Template,
    Validation,
    Other,
}

impl fmt::Display for BrixErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = match self {
            Self::Io => "IO",
            Self::Cli => "CLI",
            Self::Template => "Template",
            Self::Validation => "Validation",
            Self::Other => "Other",
        };
        write!(f, "{formatted}")
    }
}

fn missing_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("\nField '{field}' is required!"))
        .collect()
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(closest) => format!("... did you mean '{closest}'?"),
        None => String::new(),
    }
}

impl BrixError {
    /// 仅包含消息的错误
    pub fn with<S: Into<String>>(msg: S) -> Self {
        Self::Message(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
    pub fn execution<S: Into<String>>(msg: S) -> Self {
        Self::Execution(msg.into())
    }
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
    pub fn command_failed<N, C>(name: N, config: C, cause: BrixError) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self::CommandFailed {
            name: name.into(),
            config: config.into(),
            cause: Box::new(cause),
        }
    }

    pub fn kind(&self) -> BrixErrorKind {
        match self {
            BrixError::Io(_) => BrixErrorKind::Io,
            BrixError::Cli(_) => BrixErrorKind::Cli,
            BrixError::Template(_) => BrixErrorKind::Template,
            BrixError::Validation { .. } => BrixErrorKind::Validation,
            BrixError::CommandFailed { cause, .. } => cause.kind(),
            _ => BrixErrorKind::Other,
        }
    }

    /// 校验失败时缺失的字段，已排序
    pub fn missing_fields(&self) -> Option<Vec<&str>> {
        match self {
            BrixError::Validation { fields } => {
                let mut fields: Vec<&str> = fields.iter().map(String::as_str).collect();
                fields.sort_unstable();
                Some(fields)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for BrixError {
    fn from(err: std::io::Error) -> Self {
        BrixError::Io(err)
    }
}

impl From<clap::Error> for BrixError {
    fn from(err: clap::Error) -> Self {
        BrixError::Cli(err.to_string())
    }
}

impl From<serde_yaml::Error> for BrixError {
    fn from(err: serde_yaml::Error) -> Self {
        BrixError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for BrixError {
    fn from(err: serde_json::Error) -> Self {
        BrixError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for BrixError {
    fn from(err: toml::de::Error) -> Self {
        BrixError::Parse(err.to_string())
    }
}

impl From<handlebars::RenderError> for BrixError {
    fn from(err: handlebars::RenderError) -> Self {
        BrixError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for BrixError {
    fn from(err: handlebars::TemplateError) -> Self {
        BrixError::Template(err.to_string())
    }
}

impl From<fancy_regex::Error> for BrixError {
    fn from(err: fancy_regex::Error) -> Self {
        BrixError::Regex(err.to_string())
    }
}

impl From<dialoguer::Error> for BrixError {
    fn from(err: dialoguer::Error) -> Self {
        BrixError::Prompt(err.to_string())
    }
}

impl From<walkdir::Error> for BrixError {
    fn from(err: walkdir::Error) -> Self {
        BrixError::Io(err.into())
    }
}
