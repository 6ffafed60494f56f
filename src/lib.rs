// 公共API暴露
mod cli;
mod config;
mod error;
mod generator;
mod models;
mod sdk;
mod sources;
mod utils;

// 暴露需要访问的函数
pub use cli::{CliArgs, parse_args};
pub use config::{
    CONFIG_FILE_NAME, FrameworkConfig, GeneratorConfig, PluginConfig, PluginFormats, ToolchainConfig,
};
pub use error::{GenerateError, Result};
pub use generator::{
    build_argument_template, build_entries, format_summary, generate_compile_commands, write_database,
};
pub use models::{ArgumentTemplate, CompileDatabase, CompileEntry, SdkPath, SourceFile};
pub use sdk::resolve_sdk_path;
pub use sources::{SOURCE_DIR_NAME, discover_source_files};
pub use utils::find_project_root;
pub use utils::get_clean_absolute_path;
pub use utils::is_debug_mode;
pub use utils::set_debug_mode;
