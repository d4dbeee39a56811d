use crate::source_file::interface::SourceFile;

#[derive(Debug, Clone)]
pub struct SourceFileFake {
    name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
    fail_read: bool,
}

impl SourceFileFake {
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: Some(name.to_string()),
            content_type: content_type.to_string(),
            bytes,
            fail_read: false,
        }
    }

    pub fn with_failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }
}

impl SourceFile for SourceFileFake {
    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn content_type(&self) -> String {
        self.content_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn read(&self) -> std::io::Result<Vec<u8>> {
        if self.fail_read {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "file truncated while reading",
            ));
        }
        Ok(self.bytes.clone())
    }
}
