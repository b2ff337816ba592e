//! 提取选项与统计信息（模块）

/// 提取选项
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { threads: None }
    }
}

/// 提取统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ExtractStats {
    /// 实际扫描的文件数
    pub files_scanned: usize,
    /// 去重前的候选项总数
    pub candidates_total: usize,
    /// 去重后的唯一条目数
    pub unique_total: usize,
}
