//! 配置文件加载（JSON）
//!
//! 配置文件名沿用历史约定 `config.ini`，内容实际为一个 string→string 的
//! JSON 对象。未识别的键一律忽略。
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::ExtractError;

/// 默认配置文件名（工作目录下）
pub const CONFIG_FILE_NAME: &str = "config.ini";
/// 默认输出文件名（工作目录下）
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// 配置文件的原始形态（仅关心两个键，其余键由 serde 忽略）
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    #[serde(default, rename = "TargetPath")]
    target_path: Option<String>,
    #[serde(default, rename = "TargetFile")]
    target_file: Option<String>,
}

/// 解析并校验后的配置（进程内只读）
#[derive(Debug, Clone)]
pub struct Config {
    /// 遍历的根目录
    pub target_path: PathBuf,
    /// 接受的文件名列表（仅文件名，不含路径；精确、大小写敏感匹配）
    pub target_files: Vec<String>,
}

/// 从指定路径加载配置
/// - `TargetPath`：必需且非空
/// - `TargetFile`：逗号分隔的文件名列表；分割前去掉所有空格与制表符，
///   分割后丢弃空元素，结果必须非空
pub fn load_config(path: &Path) -> Result<Config, ExtractError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExtractError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawConfig =
        serde_json::from_str(&text).map_err(|source| ExtractError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    let target_path = match raw.target_path {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => return Err(ExtractError::ConfigMissing { key: "TargetPath" }),
    };

    let target_file = match raw.target_file {
        Some(f) if !f.is_empty() => f,
        _ => return Err(ExtractError::ConfigMissing { key: "TargetFile" }),
    };

    let target_files = split_target_files(&target_file);
    if target_files.is_empty() {
        return Err(ExtractError::ConfigMissing { key: "TargetFile" });
    }

    Ok(Config { target_path, target_files })
}

/// 分割 `TargetFile` 配置值为文件名列表
fn split_target_files(value: &str) -> Vec<String> {
    let cleaned: String = value.chars().filter(|c| *c != ' ' && *c != '\t').collect();
    cleaned
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
