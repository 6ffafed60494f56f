use crate::debug_println;
use crate::error::{GenerateError, Result};
use crate::models::SdkPath;
use std::process::Command;

/// 定位工具的参数，输出当前 SDK 根目录
const SHOW_SDK_PATH_ARG: &str = "--show-sdk-path";

/// 运行 SDK 定位工具（通常是 xcrun）获取 SDK 路径
///
/// 工具不在 PATH 中、无法启动、返回非零或输出为空都视为失败。
/// 子进程没有超时，工具卡住时整个生成过程也会卡住。
pub fn resolve_sdk_path(locator: &str) -> Result<SdkPath> {
    debug_println!("[DEBUG sdk] Locating SDK locator tool: {}", locator);
    let tool_path = which::which(locator)
        .map_err(|e| GenerateError::toolchain(locator, format!("not found in PATH ({})", e)))?;
    debug_println!("[DEBUG sdk] Using locator at {}", tool_path.display());

    let output = Command::new(&tool_path)
        .arg(SHOW_SDK_PATH_ARG)
        .output()
        .map_err(|e| GenerateError::toolchain(locator, format!("failed to run: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GenerateError::toolchain(
            locator,
            format!("exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let sdk = stdout.trim();
    if sdk.is_empty() {
        return Err(GenerateError::toolchain(locator, "printed an empty SDK path"));
    }

    debug_println!("[DEBUG sdk] SDK path: {}", sdk);
    Ok(SdkPath::new(sdk))
}
