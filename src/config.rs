use crate::debug_println;
use crate::error::{GenerateError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 工程目录下默认查找的配置文件名
pub const CONFIG_FILE_NAME: &str = "juce2clangd.toml";

/// 默认启用的 JUCE 模块
const DEFAULT_MODULES: &[&str] = &[
    "juce_audio_basics",
    "juce_audio_devices",
    "juce_audio_formats",
    "juce_audio_plugin_client",
    "juce_audio_processors",
    "juce_audio_utils",
    "juce_core",
    "juce_data_structures",
    "juce_events",
    "juce_graphics",
    "juce_gui_basics",
    "juce_gui_extra",
];

/// 生成器的完整配置，所有字段都有默认值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub toolchain: ToolchainConfig,
    pub framework: FrameworkConfig,
    pub plugin: PluginConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    pub compiler: String,     // e.g., "clang++"
    pub cxx_standard: String, // e.g., "c++17"
    pub stdlib: String,       // e.g., "libc++"
    pub locator: String,      // SDK 定位工具，默认 xcrun
    pub source_extensions: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        ToolchainConfig {
            compiler: "clang++".to_string(),
            cxx_standard: "c++17".to_string(),
            stdlib: "libc++".to_string(),
            locator: "xcrun".to_string(),
            source_extensions: vec!["cpp".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkConfig {
    /// JUCE modules 根目录，未设置时使用 ~/JUCE/modules
    pub modules_dir: Option<PathBuf>,
    pub modules: Vec<String>,
    /// VST3 SDK 相对 modules 根目录的位置
    pub vst3_sdk_subdir: PathBuf,
    /// Projucer 生成代码的目录（相对工程根目录）
    pub project_code_dir: PathBuf,
    /// 额外的宏定义，不带 -D 前缀
    pub definitions: Vec<String>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        FrameworkConfig {
            modules_dir: None,
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            vst3_sdk_subdir: PathBuf::from("juce_audio_processors_headless")
                .join("format_types")
                .join("VST3_SDK"),
            project_code_dir: PathBuf::from("JuceLibraryCode"),
            definitions: Vec::new(),
        }
    }
}

impl FrameworkConfig {
    /// 获取 JUCE modules 根目录
    pub fn resolved_modules_dir(&self) -> PathBuf {
        if let Some(custom_dir) = &self.modules_dir {
            debug_println!("[DEBUG config] Using custom modules dir: {}", custom_dir.display());
            return custom_dir.clone();
        }
        let relative = PathBuf::from("JUCE").join("modules");
        match directories::BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(relative),
            None => {
                debug_println!("[DEBUG config] No home directory, modules dir left relative");
                relative
            }
        }
    }

    /// VST3 SDK 的完整路径
    pub fn vst3_sdk_dir(&self) -> PathBuf {
        self.resolved_modules_dir().join(&self.vst3_sdk_subdir)
    }
}

/// 插件构建目标
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginFormats {
    pub vst3: bool,
    pub standalone: bool,
    pub au: bool,
    pub vst: bool,
}

impl Default for PluginFormats {
    fn default() -> Self {
        PluginFormats {
            vst3: true,
            standalone: false,
            au: false,
            vst: false,
        }
    }
}

/// 插件身份信息，对应 JucePlugin_* 宏
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub version: String,
    pub formats: PluginFormats,
    pub is_synth: bool,
    pub wants_midi_input: bool,
    pub produces_midi_output: bool,
    pub is_midi_effect: bool,
    pub editor_requires_keyboard_focus: bool,
    pub vst3_can_replace_vst2: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            name: "GRAIN".to_string(),
            description: "GRAIN".to_string(),
            manufacturer: "yourcompany".to_string(),
            version: "1.0.0".to_string(),
            formats: PluginFormats::default(),
            is_synth: false,
            wants_midi_input: false,
            produces_midi_output: false,
            is_midi_effect: false,
            editor_requires_keyboard_focus: false,
            vst3_can_replace_vst2: false,
        }
    }
}

impl GeneratorConfig {
    /// 解析 TOML 配置内容，`origin` 只用于错误信息
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| GenerateError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// 从文件读取配置
    pub fn load(path: &Path) -> Result<Self> {
        debug_println!("[DEBUG config] Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// 显式指定的配置文件必须存在；否则尝试工程目录下的 juce2clangd.toml，再否则使用默认值
    pub fn load_for_project(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = project_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug_println!("[DEBUG config] No config file, using defaults");
            Ok(Self::default())
        }
    }
}
