use std::path::PathBuf;

use thiserror::Error;

/// 生成过程中的错误类型，任何一种都会终止本次运行
#[derive(Error, Debug)]
pub enum GenerateError {
    /// SDK 定位工具不存在、无法启动、返回非零或没有输出
    #[error("failed to resolve SDK path with `{tool}`: {reason}")]
    ToolchainResolution { tool: String, reason: String },

    /// 输出文件无法创建或写入
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件无法读取或格式错误
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GenerateError {
    pub fn toolchain(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ToolchainResolution {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
