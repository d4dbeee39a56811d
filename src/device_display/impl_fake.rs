use crate::device_display::interface::{write_into, DeviceDisplay, DisplayBuffer};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Keeps the last flushed frame so tests can read what the user would see.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    pending: DisplayBuffer,
    shown: Arc<Mutex<DisplayBuffer>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<String> {
        match self.shown.lock() {
            Ok(shown) => shown.to_vec(),
            Err(poisoned) => poisoned.into_inner().to_vec(),
        }
    }

    pub fn shows(&self, needle: &str) -> bool {
        self.shown().iter().any(|line| line.contains(needle))
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending = DisplayBuffer::default();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_into(&mut self.pending, line, text)
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shown = self.shown.lock().map_err(|_| "display buffer poisoned")?;
        *shown = self.pending.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_display::interface::DISPLAY_WIDTH;

    #[test]
    fn shows_lines_only_after_flush() {
        let mut display = DeviceDisplayFake::new();

        display.write_line(0, "Ready").unwrap();
        assert!(!display.shows("Ready"));

        display.flush().unwrap();
        assert!(display.shows("Ready"));
    }

    #[test]
    fn rejects_out_of_range_lines_and_truncates() {
        let mut display = DeviceDisplayFake::new();

        assert!(display.write_line(9, "nope").is_err());

        display.write_line(1, &"x".repeat(100)).unwrap();
        display.flush().unwrap();
        assert_eq!(display.shown()[1].len(), DISPLAY_WIDTH);
    }
}
