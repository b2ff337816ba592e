//! 目标文件选择（递归遍历 + 文件名匹配）
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ExtractError;

/// 递归遍历根目录，选出文件名在接受列表中的普通文件
/// 稳定性保证：按文件名字典序的深度优先前序遍历，同一文件系统状态下
/// 结果可复现。匹配仅看文件名本身，精确且大小写敏感。
/// 遍历中的任何错误（根目录不可读、子项不可访问）都是致命错误。
pub(crate) fn collect_target_files(
    root: &Path,
    accepted: &[String],
) -> Result<Vec<PathBuf>, ExtractError> {
    let accepted: HashSet<&str> = accepted.iter().map(String::as_str).collect();
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ExtractError::Selection {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        // 忽略目录
        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            if accepted.contains(name) {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn matches_base_name_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("ui.lua"));
        touch(&dir.path().join("sub/deep/ui.lua"));
        touch(&dir.path().join("sub/notes.txt"));

        let files =
            collect_target_files(dir.path(), &["ui.lua".to_string()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.file_name().unwrap() == "ui.lua"));
    }

    #[test]
    fn non_matching_names_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("UI.LUA"));

        let files =
            collect_target_files(dir.path(), &["ui.lua".to_string()]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn traversal_order_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b/ui.lua"));
        touch(&dir.path().join("a/ui.lua"));
        touch(&dir.path().join("c/ui.lua"));

        let first =
            collect_target_files(dir.path(), &["ui.lua".to_string()]).unwrap();
        let second =
            collect_target_files(dir.path(), &["ui.lua".to_string()]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0], dir.path().join("a/ui.lua"));
        assert_eq!(first[1], dir.path().join("b/ui.lua"));
        assert_eq!(first[2], dir.path().join("c/ui.lua"));
    }

    #[test]
    fn empty_accepted_set_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("ui.lua"));
        let files = collect_target_files(dir.path(), &[]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = collect_target_files(&missing, &["ui.lua".to_string()]).unwrap_err();
        assert!(matches!(err, ExtractError::Selection { .. }));
    }
}
