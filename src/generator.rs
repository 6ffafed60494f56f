use crate::config::GeneratorConfig;
use crate::debug_println;
use crate::error::{GenerateError, Result};
use crate::models::{ArgumentTemplate, CompileDatabase, CompileEntry, SdkPath, SourceFile};
use crate::sources::discover_source_files;
use crate::utils::{display_file_name, get_clean_absolute_path};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 辅助函数：布尔值转为宏定义使用的 0/1
fn flag_value(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// 生成所有源文件共用的编译参数
///
/// 纯函数：只依赖工程目录、SDK 路径和配置，不访问文件系统。
/// 结果不包含 -c 和源文件路径，这两项由 [`build_entries`] 逐个追加。
pub fn build_argument_template(
    project_dir: &Path,
    sdk_path: &SdkPath,
    config: &GeneratorConfig,
) -> ArgumentTemplate {
    debug_println!("[DEBUG generator] Building argument template...");
    let toolchain = &config.toolchain;
    let framework = &config.framework;
    let plugin = &config.plugin;

    let mut template = ArgumentTemplate::new();
    template.push(toolchain.compiler.clone());
    template.push(format!("-std={}", toolchain.cxx_standard));
    template.push(format!("-stdlib={}", toolchain.stdlib));
    template.push(format!("-isysroot{}", sdk_path.as_path().display()));

    // 构建模式与 Projucer 全局设置
    for define in [
        "DEBUG=1",
        "_DEBUG=1",
        "JUCE_GLOBAL_MODULE_SETTINGS_INCLUDED=1",
        "JUCER_XCODE_MAC_F6D2F4CF=1",
        "JUCE_STANDALONE_APPLICATION=0",
    ] {
        template.push(format!("-D{}", define));
    }
    for define in &framework.definitions {
        debug_println!("[DEBUG generator] Added extra definition: {}", define);
        template.push(format!("-D{}", define));
    }

    // JUCE 模块可用性
    for module in &framework.modules {
        template.push(format!("-DJUCE_MODULE_AVAILABLE_{}=1", module));
    }

    // 插件身份
    template.push(format!("-DJucePlugin_Name=\"{}\"", plugin.name));
    template.push(format!("-DJucePlugin_Desc=\"{}\"", plugin.description));
    template.push(format!("-DJucePlugin_Manufacturer=\"{}\"", plugin.manufacturer));
    template.push(format!("-DJucePlugin_Version={}", plugin.version));
    template.push(format!("-DJucePlugin_VersionString=\"{}\"", plugin.version));

    // 构建目标与插件特性
    let switches = [
        ("JucePlugin_Build_VST3", plugin.formats.vst3),
        ("JucePlugin_Build_Standalone", plugin.formats.standalone),
        ("JucePlugin_Build_AU", plugin.formats.au),
        ("JucePlugin_Build_VST", plugin.formats.vst),
        ("JucePlugin_IsSynth", plugin.is_synth),
        ("JucePlugin_WantsMidiInput", plugin.wants_midi_input),
        ("JucePlugin_ProducesMidiOutput", plugin.produces_midi_output),
        ("JucePlugin_IsMidiEffect", plugin.is_midi_effect),
        ("JucePlugin_EditorRequiresKeyboardFocus", plugin.editor_requires_keyboard_focus),
        ("JUCE_VST3_CAN_REPLACE_VST2", plugin.vst3_can_replace_vst2),
    ];
    for (name, enabled) in switches {
        template.push(format!("-D{}={}", name, flag_value(enabled)));
    }

    // 头文件搜索路径
    let project_code_dir = get_clean_absolute_path(project_dir, &framework.project_code_dir);
    template.push(format!("-I{}", project_code_dir.display()));
    template.push(format!("-I{}", framework.resolved_modules_dir().display()));
    template.push(format!("-I{}", framework.vst3_sdk_dir().display()));

    debug_println!("[DEBUG generator] Template has {} arguments", template.len());
    template
}

/// 为每个源文件生成一条编译记录，顺序与扫描顺序一致
pub fn build_entries(
    project_dir: &Path,
    template: &ArgumentTemplate,
    sources: &[SourceFile],
) -> CompileDatabase {
    let directory = project_dir.to_string_lossy().into_owned();
    sources
        .iter()
        .map(|source| {
            let file = get_clean_absolute_path(project_dir, &source.relative_path)
                .to_string_lossy()
                .into_owned();
            debug_println!("[DEBUG generator] Entry for {}", file);
            CompileEntry {
                directory: directory.clone(),
                arguments: template.for_file(&file),
                file,
            }
        })
        .collect()
}

/// 扫描工程源文件并生成完整的编译数据库
pub fn generate_compile_commands(
    project_dir: &Path,
    sdk_path: &SdkPath,
    config: &GeneratorConfig,
) -> CompileDatabase {
    let template = build_argument_template(project_dir, sdk_path, config);
    let sources = discover_source_files(project_dir, &config.toolchain.source_extensions);
    build_entries(project_dir, &template, &sources)
}

/// 将编译数据库写入 JSON 文件（2 空格缩进，覆盖已有文件）
///
/// 写入过程中出错可能留下空文件或不完整的文件，不保证原子性。
pub fn write_database(path: &Path, database: &CompileDatabase) -> Result<()> {
    debug_println!("[DEBUG generator] Writing {} entries to {}", database.len(), path.display());
    let file = File::create(path).map_err(|e| GenerateError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, database)
        .map_err(|e| GenerateError::io(path, e.into()))?;
    writer.flush().map_err(|e| GenerateError::io(path, e))?;
    Ok(())
}

/// 生成运行结束时打印的摘要
pub fn format_summary(output_path: &Path, database: &CompileDatabase) -> String {
    let mut summary = format!(
        "Generated {} with {} entries:",
        output_path.display(),
        database.len()
    );
    for entry in database {
        summary.push_str("\n  - ");
        summary.push_str(&display_file_name(&entry.file));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameworkConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            framework: FrameworkConfig {
                modules_dir: Some(PathBuf::from("/Users/dev/JUCE/modules")),
                ..FrameworkConfig::default()
            },
            ..GeneratorConfig::default()
        }
    }

    fn sdk() -> SdkPath {
        SdkPath::new("/Applications/Xcode.app/Contents/Developer/Platforms/MacOSX.platform/Developer/SDKs/MacOSX.sdk")
    }

    #[test]
    #[cfg(unix)]
    fn test_template_matches_default_flag_list() {
        let template = build_argument_template(Path::new("/work/grain"), &sdk(), &test_config());
        let args = template.as_slice();

        assert_eq!(args[0], "clang++");
        assert_eq!(args[1], "-std=c++17");
        assert_eq!(args[2], "-stdlib=libc++");
        assert_eq!(
            args[3],
            "-isysroot/Applications/Xcode.app/Contents/Developer/Platforms/MacOSX.platform/Developer/SDKs/MacOSX.sdk"
        );
        assert_eq!(args[4], "-DDEBUG=1");
        assert_eq!(args[9], "-DJUCE_MODULE_AVAILABLE_juce_audio_basics=1");
        assert_eq!(args[20], "-DJUCE_MODULE_AVAILABLE_juce_gui_extra=1");
        assert_eq!(args[21], "-DJucePlugin_Name=\"GRAIN\"");
        assert_eq!(args[24], "-DJucePlugin_Version=1.0.0");
        assert_eq!(args[25], "-DJucePlugin_VersionString=\"1.0.0\"");
        assert_eq!(args[26], "-DJucePlugin_Build_VST3=1");
        assert_eq!(args[27], "-DJucePlugin_Build_Standalone=0");
        assert_eq!(args[35], "-DJUCE_VST3_CAN_REPLACE_VST2=0");

        let tail = &args[args.len() - 3..];
        assert_eq!(tail[0], "-I/work/grain/JuceLibraryCode");
        assert_eq!(tail[1], "-I/Users/dev/JUCE/modules");
        assert_eq!(
            tail[2],
            "-I/Users/dev/JUCE/modules/juce_audio_processors_headless/format_types/VST3_SDK"
        );
        assert_eq!(args.len(), 39);
    }

    #[test]
    fn test_template_has_no_per_file_flags() {
        let template = build_argument_template(Path::new("/work/grain"), &sdk(), &test_config());
        assert!(!template.as_slice().iter().any(|a| a == "-c" || a == "-o"));
    }

    #[test]
    fn test_template_follows_plugin_config() {
        let mut config = test_config();
        config.plugin.name = "Shimmer".to_string();
        config.plugin.formats.au = true;
        config.plugin.is_synth = true;
        config.framework.modules = vec!["juce_dsp".to_string()];
        config.framework.definitions = vec!["JUCE_USE_CURL=0".to_string()];

        let template = build_argument_template(Path::new("/work/shimmer"), &sdk(), &config);
        let args = template.as_slice();
        assert!(args.contains(&"-DJucePlugin_Name=\"Shimmer\"".to_string()));
        assert!(args.contains(&"-DJucePlugin_Build_AU=1".to_string()));
        assert!(args.contains(&"-DJucePlugin_IsSynth=1".to_string()));
        assert!(args.contains(&"-DJUCE_MODULE_AVAILABLE_juce_dsp=1".to_string()));
        assert!(args.contains(&"-DJUCE_USE_CURL=0".to_string()));
        assert!(!args.contains(&"-DJUCE_MODULE_AVAILABLE_juce_core=1".to_string()));
    }

    #[test]
    #[cfg(unix)]
    fn test_build_entries() {
        let project_dir = Path::new("/work/grain");
        let template = build_argument_template(project_dir, &sdk(), &test_config());
        let sources = vec![
            SourceFile { relative_path: PathBuf::from("Source/A.cpp") },
            SourceFile { relative_path: PathBuf::from("Source/sub/B.cpp") },
        ];

        let database = build_entries(project_dir, &template, &sources);
        assert_eq!(database.len(), 2);
        assert_eq!(database[0].file, "/work/grain/Source/A.cpp");
        assert_eq!(database[1].file, "/work/grain/Source/sub/B.cpp");
        for entry in &database {
            assert_eq!(entry.directory, "/work/grain");
            let n = entry.arguments.len();
            assert_eq!(entry.arguments[n - 2], "-c");
            assert_eq!(entry.arguments[n - 1], entry.file);
            assert_eq!(n, template.len() + 2);
        }
    }

    #[test]
    fn test_write_database_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");
        let database = vec![CompileEntry {
            directory: "/work/grain".to_string(),
            file: "/work/grain/Source/A.cpp".to_string(),
            arguments: vec!["clang++".to_string(), "-c".to_string(), "/work/grain/Source/A.cpp".to_string()],
        }];

        write_database(&path, &database).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"directory\": \"/work/grain\","));
        let parsed: Vec<CompileEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, database);
    }

    #[test]
    fn test_write_empty_database() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");
        write_database(&path, &Vec::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_database_missing_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no/such/dir/compile_commands.json");
        let result = write_database(&path, &Vec::new());
        match result {
            Err(GenerateError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_format_summary() {
        let database = vec![
            CompileEntry {
                directory: "/p".to_string(),
                file: "/p/Source/PluginEditor.cpp".to_string(),
                arguments: Vec::new(),
            },
            CompileEntry {
                directory: "/p".to_string(),
                file: "/p/Source/UI/MeterPanel.cpp".to_string(),
                arguments: Vec::new(),
            },
        ];
        let summary = format_summary(Path::new("/p/compile_commands.json"), &database);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Generated /p/compile_commands.json with 2 entries:");
        assert_eq!(lines[1], "  - PluginEditor.cpp");
        assert_eq!(lines[2], "  - MeterPanel.cpp");
    }
}
