/// A user-supplied file whose metadata can be inspected before its contents
/// are read.
pub trait SourceFile {
    fn name(&self) -> Option<String>;

    /// Declared content type, e.g. `image/png`.
    fn content_type(&self) -> String;

    fn size(&self) -> u64;

    fn read(&self) -> std::io::Result<Vec<u8>>;
}
