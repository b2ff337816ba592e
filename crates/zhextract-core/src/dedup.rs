//! 首次出现序去重（内部使用）
use std::collections::HashSet;

/// 去重收集器：成员集合 + 仅追加的有序列表
/// 相等性按字节精确比较（含引号）。O(N) 总量，O(1) 期望成员测试。
#[derive(Debug, Default)]
pub(crate) struct DedupCollector {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl DedupCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 尝试收录一个候选项；重复项丢弃，返回是否为新条目
    pub(crate) fn push(&mut self, candidate: String) -> bool {
        if self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
            return true;
        }
        false
    }

    /// 交出首次出现序的唯一条目列表
    pub(crate) fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_first_seen_order() {
        let mut c = DedupCollector::new();
        assert!(c.push("\"你好\"".to_string()));
        assert!(c.push("\"标题\"".to_string()));
        assert!(!c.push("\"你好\"".to_string()));
        assert!(c.push("\"确认\"".to_string()));
        assert_eq!(
            c.into_vec(),
            vec!["\"你好\"".to_string(), "\"标题\"".to_string(), "\"确认\"".to_string()]
        );
    }

    #[test]
    fn equality_is_byte_exact() {
        let mut c = DedupCollector::new();
        assert!(c.push("\"你好\"".to_string()));
        // 引号内内容不同即不同条目
        assert!(c.push("\"你好 \"".to_string()));
        assert_eq!(c.into_vec().len(), 2);
    }
}
