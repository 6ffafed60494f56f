use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 编译命令结构，用于生成compile_commands.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileEntry {
    pub directory: String,
    pub file: String,
    pub arguments: Vec<String>,
}

/// 整个编译数据库，按扫描顺序排列
pub type CompileDatabase = Vec<CompileEntry>;

/// 当前平台 SDK 的根目录（xcrun --show-sdk-path 的输出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkPath(PathBuf);

impl SdkPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SdkPath(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SdkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// 所有源文件共用的编译参数（不含 -c 和源文件本身）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTemplate {
    args: Vec<String>,
}

impl ArgumentTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 为某个源文件生成完整参数：模板 + "-c" + 源文件
    pub fn for_file(&self, file: &str) -> Vec<String> {
        let mut arguments = Vec::with_capacity(self.args.len() + 2);
        arguments.extend(self.args.iter().cloned());
        arguments.push("-c".to_string());
        arguments.push(file.to_string());
        arguments
    }
}

/// 扫描得到的一个源文件（相对工程根目录的路径）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub relative_path: PathBuf,
}
