use crate::debug_println;
use crate::models::SourceFile;
use std::path::Path;
use walkdir::WalkDir;

/// 源文件所在的子目录
pub const SOURCE_DIR_NAME: &str = "Source";

/// 递归扫描 `project_dir/Source`，返回扩展名匹配的源文件
///
/// 目录不存在时返回空列表而不是错误；无法读取的条目直接跳过。
/// 同一目录内按文件名排序，保证多次运行输出一致。
pub fn discover_source_files(project_dir: &Path, extensions: &[String]) -> Vec<SourceFile> {
    let source_dir = project_dir.join(SOURCE_DIR_NAME);
    debug_println!("[DEBUG sources] Scanning {}", source_dir.display());

    if !source_dir.is_dir() {
        debug_println!("[DEBUG sources] Source directory missing, nothing to scan");
        return Vec::new();
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(&source_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        // 不进入链接目录，但链接到文件的符号链接照常收录
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            continue;
        }
        let matched = path
            .extension()
            .map(|ext| extensions.iter().any(|want| ext == want.as_str()))
            .unwrap_or(false);
        if !matched {
            continue;
        }

        let relative_path = path.strip_prefix(project_dir).unwrap_or(path).to_path_buf();
        debug_println!("[DEBUG sources] Found {}", relative_path.display());
        sources.push(SourceFile { relative_path });
    }

    debug_println!("[DEBUG sources] {} source files found", sources.len());
    sources
}
