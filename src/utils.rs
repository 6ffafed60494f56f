use crate::sources::SOURCE_DIR_NAME;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// 全局调试控制标志，默认关闭
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// 设置调试模式
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// 获取当前调试模式状态
pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// 创建一个条件打印宏，只有在调试模式下才会打印
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::is_debug_mode() {
            println!($($arg)*);
        }
    };
}

/// 逻辑上解析绝对路径（不解析符号链接，仅处理路径组件）
/// `rel` 为绝对路径时直接使用，否则拼接到 `base` 之后，并消除 "." 和 ".."
pub fn get_clean_absolute_path(base: &Path, rel: &Path) -> PathBuf {
    let mut result = if rel.is_absolute() {
        PathBuf::new()
    } else {
        base.to_path_buf()
    };

    for component in rel.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::RootDir => {
                result.push(Component::RootDir.as_os_str());
            }
            Component::Prefix(prefix) => {
                // Windows 盘符
                result = PathBuf::from(prefix.as_os_str());
            }
            Component::CurDir => {}
        }
    }

    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// 判断目录是否像一个 JUCE 工程根目录：包含 `*.jucer` 文件或 `Source/` 子目录
fn looks_like_project_root(dir: &Path) -> bool {
    if dir.join(SOURCE_DIR_NAME).is_dir() {
        return true;
    }
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).any(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("jucer"))
        }),
        Err(_) => false,
    }
}

/// 从 `start` 开始向上查找工程根目录，找不到时返回 `start` 本身
pub fn find_project_root(start: &Path) -> PathBuf {
    debug_println!("[DEBUG utils] Searching project root from {}", start.display());
    for dir in start.ancestors() {
        if looks_like_project_root(dir) {
            debug_println!("[DEBUG utils] Project root found: {}", dir.display());
            return dir.to_path_buf();
        }
    }
    debug_println!("[DEBUG utils] No project marker found, using start directory");
    start.to_path_buf()
}

/// 取路径的文件名部分，用于摘要输出
pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
