use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use juce2clangd::{
    CliArgs, GeneratorConfig, SdkPath, debug_println, find_project_root, format_summary,
    generate_compile_commands, get_clean_absolute_path, parse_args, resolve_sdk_path,
    set_debug_mode, write_database,
};

const OUTPUT_FILE_NAME: &str = "compile_commands.json";

fn main() -> Result<()> {
    let args = parse_args();
    set_debug_mode(args.debug);
    run(&args)
}

fn run(args: &CliArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read current directory")?;

    // 1. 确定工程根目录（绝对路径，之后显式传递，不切换工作目录）
    let project_dir = match &args.project_dir {
        Some(dir) => get_clean_absolute_path(&cwd, dir),
        None => find_project_root(&cwd),
    };
    debug_println!("[DEBUG] Project Root: {}", project_dir.display());

    // 2. 读取配置，命令行参数优先
    let mut config = GeneratorConfig::load_for_project(&project_dir, args.config.as_deref())
        .context("Failed to load generator config")?;
    if let Some(locator) = &args.locator {
        config.toolchain.locator = locator.clone();
    }
    if let Some(modules_dir) = &args.juce_modules {
        config.framework.modules_dir = Some(get_clean_absolute_path(&cwd, modules_dir));
    }

    // 3. 获取 SDK 路径
    let sdk_path = match &args.sdk_path {
        Some(path) => SdkPath::new(path.clone()),
        None => resolve_sdk_path(&config.toolchain.locator)
            .context("Failed to locate the platform SDK")?,
    };
    debug_println!("[DEBUG] SDK Path: {}", sdk_path);

    // 4. 生成编译数据库并写入
    let database = generate_compile_commands(&project_dir, &sdk_path, &config);
    let output_path: PathBuf = match &args.output {
        Some(path) => get_clean_absolute_path(&cwd, path),
        None => project_dir.join(OUTPUT_FILE_NAME),
    };
    write_database(&output_path, &database)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("{}", format_summary(&output_path, &database));
    Ok(())
}
