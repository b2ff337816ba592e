//! 致命错误分类（对外暴露）
use std::path::PathBuf;
use thiserror::Error;

/// 提取流程中的错误类型
/// 所有错误均为致命错误：统一上抛到顶层打印并退出，不做静默恢复。
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 配置文件不存在或不可读
    #[error("读取配置文件 {} 失败", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件内容不是合法的 JSON 对象
    #[error("配置文件 {} 解析失败", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 必需的配置项缺失或为空（与原始程序的提示语保持一致）
    #[error("不存在名为{key}的配置或配置为空")]
    ConfigMissing { key: &'static str },

    /// 遍历目标目录失败（根目录不可读或子项不可访问）
    #[error("遍历目录 {} 失败", path.display())]
    Selection {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 没有任何文件与配置的文件名匹配
    #[error("找不到指定的文件，请检查配置")]
    EmptySelection,

    /// 打开或读取目标文件失败
    #[error("读取文件 {} 失败", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入输出失败
    #[error("写入输出失败")]
    Output {
        #[source]
        source: std::io::Error,
    },
}
