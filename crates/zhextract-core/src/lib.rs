//! 中文字符串提取核心库
//!
//! 此库用于从项目目录中提取包含中文的字符串字面量，去重后交给输出端，
//! 以便放入翻译数据库。设计要点：
//! - 选择器按文件名精确匹配，遍历顺序固定为文件名字典序，结果可复现。
//! - 行扫描为词法近似：先用行准入正则过滤注释行，再用贪婪正则提取带
//!   引号的 Han 字面量。两个正则的形态是下游兼容性契约，不可“修正”。
//! - 去重按字节精确、首次出现序；全流程中任何错误均为致命错误。
//! - 逐文件扫描相互独立，可选并行，并行时按选择器顺序合并，输出与
//!   串行逐字节一致。

mod config;
mod dedup;
mod errors;
mod extract;
mod options;
mod scan;
mod select;

// 对外暴露的最小 API
pub use config::{load_config, Config, CONFIG_FILE_NAME, OUTPUT_FILE_NAME};
pub use errors::ExtractError;
pub use extract::{extract, write_output};
pub use options::{ExtractOptions, ExtractStats};
