use crate::error::LoadError;
use crate::models::document::SubmittedDocument;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 答卷文本文件扩展名
const DOCUMENT_EXTENSION: &str = "txt";

/// 列出文件夹中所有答卷文本文件（按文件名排序）
pub async fn list_document_files(folder_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !folder_path.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: folder_path.display().to_string(),
        });
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(folder_path)
        .await
        .map_err(|e| LoadError::read_failed(folder_path.display().to_string(), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| LoadError::read_failed(folder_path.display().to_string(), e))?
    {
        let path = entry.path();
        let is_document = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        if is_document {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// 读取单份答卷
///
/// 非 UTF-8 内容视为损坏的答卷
pub async fn load_document(path: &Path) -> Result<SubmittedDocument, LoadError> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::NotFound { path: path_str });
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| LoadError::read_failed(path_str.clone(), e))?;
    let raw_text = String::from_utf8(bytes).map_err(|source| LoadError::InvalidUtf8 {
        path: path_str,
        source,
    })?;

    Ok(SubmittedDocument::new(source_name(path), raw_text))
}

/// 文件名作为答卷来源名称
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
