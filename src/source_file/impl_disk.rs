use crate::source_file::interface::SourceFile;
use std::path::{Path, PathBuf};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub struct SourceFileDisk {
    path: PathBuf,
    size: u64,
}

impl SourceFileDisk {
    /// Metadata is read up front; a missing or unreadable file surfaces when
    /// its contents are read.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let size = std::fs::metadata(&path)
            .map(|metadata| metadata.len())
            .unwrap_or(0);

        Self { path, size }
    }
}

pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

impl SourceFile for SourceFileDisk {
    fn name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn content_type(&self) -> String {
        content_type_for_path(&self.path).to_string()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}
