use std::path::PathBuf;

use clap::Parser;

use crate::config::{LogFormat, LogLevel};

/// brix命令行参数
#[derive(Parser, Debug, Clone)]
#[command(name = "brix")]
#[command(version)]
#[command(about = "声明式代码生成工具")]
#[command(
    long_about = "根据 <配置目录>/<LANGUAGE>/<CONFIG_NAME>.yaml 中声明的命令生成代码"
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// 目标编程语言，对应配置目录下的子目录
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// 生成的代码类型（例如 controller），同时也是不带扩展名的声明文件名
    #[arg(value_name = "CONFIG_NAME")]
    pub config_name: String,

    /// 项目名称
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// 项目内要创建的模块名称
    #[arg(value_name = "MODULE")]
    pub module: String,

    /// 相对于工作目录的配置目录。未指定时从工作目录逐级向上查找 .config/brix，直到用户主目录
    #[arg(short = 'd', long, env = "BRIX_CONFIG_DIR", value_name = "CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// 工作目录，默认为当前目录
    #[arg(short = 'w', long, env = "BRIX_WORKDIR", value_name = "WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// 日志级别
    #[arg(long, env = "BRIX_LOG_LEVEL", value_enum, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,

    /// 日志格式
    #[arg(long, env = "BRIX_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
