use std::error::Error;

pub const DISPLAY_LINES: u8 = 4;
pub const DISPLAY_WIDTH: usize = 48;

/// A small text panel showing the current state and result.
pub trait DeviceDisplay: Send {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Text longer than the panel is cut.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Called once all lines for a frame are written.
    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}

pub type DisplayBuffer = [String; DISPLAY_LINES as usize];

pub fn write_into(
    buffer: &mut DisplayBuffer,
    line: u8,
    text: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let slot = buffer
        .get_mut(line as usize)
        .ok_or_else(|| format!("Invalid line number {}", line))?;
    *slot = text.chars().take(DISPLAY_WIDTH).collect();
    Ok(())
}
