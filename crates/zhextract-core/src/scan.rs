//! 行扫描引擎（逐行读取 + 两级正则匹配）
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ExtractError;

/// 单行最多提取的候选项数量（防御性上限，超出部分丢弃）
pub(crate) const MAX_LITERALS_PER_LINE: usize = 5;

/// 两级匹配模式（进程内编译一次，跨文件复用）
/// - `line`：行准入判断。引号必须出现在第一个 `/` 或 `#` 之前，且引号内
///   含有至少一个 Han 码位。这是词法近似而非注释解析，行为刻意保持粗糙。
/// - `literal`：候选提取。贪婪匹配，一行中多个字面量通常被合并为从首个
///   引号到末个引号的单一跨度。下游依赖这一输出形态，不可改为最小匹配。
pub(crate) struct LinePatterns {
    line: Regex,
    literal: Regex,
}

impl LinePatterns {
    pub(crate) fn new() -> Self {
        Self {
            line: Regex::new(r#"^[^/#]*".*\p{Han}+.*""#).expect("line pattern"),
            literal: Regex::new(r#"".*\p{Han}+.*""#).expect("literal pattern"),
        }
    }
}

/// 扫描单个文件，按文件内顺序返回候选项（含两侧引号）
/// - 逐行流式读取，`\n` 与 `\r\n` 行尾均接受，行尾符被剥除
/// - 非 UTF-8 的行视为不匹配，跳过但不报错
/// - 打开与读取失败为致命错误
pub(crate) fn scan_file(
    path: &Path,
    patterns: &LinePatterns,
) -> Result<Vec<String>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Scan {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut candidates: Vec<String> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ExtractError::Scan {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }

        // 剥除行尾符（\n 或 \r\n）
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        // 解码失败的行按不匹配处理
        let line = match std::str::from_utf8(&buf) {
            Ok(s) => s,
            Err(_) => continue,
        };

        scan_line(line, patterns, &mut candidates);
    }

    Ok(candidates)
}

/// 对单行执行两级匹配，命中项追加到 `out`
pub(crate) fn scan_line(line: &str, patterns: &LinePatterns, out: &mut Vec<String>) {
    if !patterns.line.is_match(line) {
        return;
    }
    for m in patterns.literal.find_iter(line).take(MAX_LITERALS_PER_LINE) {
        out.push(m.as_str().to_string());
    }
}
