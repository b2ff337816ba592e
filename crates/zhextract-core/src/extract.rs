//! 提取主流程与并行调度
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::dedup::DedupCollector;
use crate::errors::ExtractError;
use crate::options::{ExtractOptions, ExtractStats};
use crate::scan::{scan_file, LinePatterns};
use crate::select::collect_target_files;

/// 提取主入口：选择目标文件 → 逐文件扫描 → 首次出现序去重
/// 稳定性保证：
/// - 文件级：选择器按文件名字典序深度优先遍历，顺序可复现
/// - 并行路径按文件索引重排后再进入去重器，输出与串行逐字节一致
/// 返回去重后的条目列表与统计信息；写出由调用方在提取完成后执行，
/// 进程中途被杀不会留下半成品输出文件。
pub fn extract(
    config: &Config,
    opts: &ExtractOptions,
) -> Result<(Vec<String>, ExtractStats), ExtractError> {
    let files = collect_target_files(&config.target_path, &config.target_files)?;

    // 判断是否有目标文件
    if files.is_empty() {
        return Err(ExtractError::EmptySelection);
    }

    let patterns = Arc::new(LinePatterns::new());
    let threads = opts.threads.unwrap_or_else(num_cpus::get);

    // 决策：多文件且线程数>1 时走并行调度，否则串行
    let per_file = if threads > 1 && files.len() > 1 {
        scan_files_parallel(&files, &patterns, threads)?
    } else {
        let mut all = Vec::with_capacity(files.len());
        for path in &files {
            all.push(scan_file(path, &patterns)?);
        }
        all
    };

    let mut stats = ExtractStats {
        files_scanned: files.len(),
        ..ExtractStats::default()
    };

    let mut collector = DedupCollector::new();
    for candidates in per_file {
        stats.candidates_total += candidates.len();
        for candidate in candidates {
            collector.push(candidate);
        }
    }

    let entries = collector.into_vec();
    stats.unique_total = entries.len();
    Ok((entries, stats))
}

/// 并行扫描：
/// - 在后台线程内创建 Rayon 线程池，逐文件并行扫描
/// - worker → 消费端通过有界通道传递 (idx, 结果)
/// - 消费端用 BTreeMap 按 idx 重排，保证与选择器顺序一致
/// - 任一文件扫描失败即为致命错误；多文件同时失败时报告索引最小者
fn scan_files_parallel(
    files: &[PathBuf],
    patterns: &Arc<LinePatterns>,
    threads: usize,
) -> Result<Vec<Vec<String>>, ExtractError> {
    use crossbeam_channel as channel;
    use rayon::prelude::*;

    type Msg = (usize, Result<Vec<String>, ExtractError>);
    let (tx, rx) = channel::bounded::<Msg>(64);

    let patterns = Arc::clone(patterns);
    let files_vec: Vec<(usize, PathBuf)> = files
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.clone()))
        .collect();

    let scan_thread = std::thread::spawn(move || {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("build rayon pool");
        pool.install(|| {
            files_vec.par_iter().for_each(|(idx, path)| {
                let res = scan_file(path, &patterns);
                let _ = tx.send((*idx, res));
            });
        });
        // 结束后 Sender 全部被丢弃，Receiver 将收到关闭信号
    });

    // 消费端：维护 next_idx 与缓存，按序收集
    let mut next_idx: usize = 0;
    let mut buffer: BTreeMap<usize, Result<Vec<String>, ExtractError>> = BTreeMap::new();
    let mut ordered: Vec<Vec<String>> = Vec::with_capacity(files.len());
    let mut first_err: Option<ExtractError> = None;

    let consume = |res: Result<Vec<String>, ExtractError>,
                       ordered: &mut Vec<Vec<String>>,
                       first_err: &mut Option<ExtractError>| {
        match res {
            Ok(candidates) => ordered.push(candidates),
            Err(e) => {
                if first_err.is_none() {
                    *first_err = Some(e);
                }
                ordered.push(Vec::new());
            }
        }
    };

    while let Ok((idx, res)) = rx.recv() {
        buffer.insert(idx, res);
        // 尝试从 next_idx 开始顺序冲刷
        while let Some(res) = buffer.remove(&next_idx) {
            consume(res, &mut ordered, &mut first_err);
            next_idx += 1;
        }
    }

    // 等待扫描线程结束
    let _ = scan_thread.join();

    // 最终冲刷残余（理论上缓冲应已清空）
    while let Some(res) = buffer.remove(&next_idx) {
        consume(res, &mut ordered, &mut first_err);
        next_idx += 1;
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(ordered),
    }
}

/// 将去重后的条目逐行写出：每条一行，`\n` 结尾，不加任何包装
pub fn write_output(entries: &[String], out: &mut dyn Write) -> Result<(), ExtractError> {
    for value in entries {
        out.write_all(value.as_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .map_err(|source| ExtractError::Output { source })?;
    }
    Ok(())
}
