use clap::Parser;
use std::path::PathBuf;

/// 为基于 Xcode 构建的 JUCE 插件工程生成 compile_commands.json
#[derive(Parser, Debug)]
#[command(name = "juce2clangd")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// 工程根目录，默认从当前目录向上查找
    #[arg(short, long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// 输出文件，默认 <project>/compile_commands.json
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 配置文件，默认 <project>/juce2clangd.toml（存在时）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 直接使用该 SDK 路径，不调用定位工具
    #[arg(long, value_name = "DIR")]
    pub sdk_path: Option<PathBuf>,

    /// SDK 定位工具，覆盖配置中的 toolchain.locator
    #[arg(long, value_name = "PROGRAM", env = "JUCE2CLANGD_LOCATOR")]
    pub locator: Option<String>,

    /// JUCE modules 根目录，覆盖配置中的 framework.modules_dir
    #[arg(long, value_name = "DIR", env = "JUCE_MODULES_DIR")]
    pub juce_modules: Option<PathBuf>,

    /// 打印调试信息
    #[arg(short, long)]
    pub debug: bool,
}

/// 解析命令行参数
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
