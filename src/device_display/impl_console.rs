use crate::device_display::interface::{
    write_into, DeviceDisplay, DisplayBuffer, DISPLAY_WIDTH,
};
use std::error::Error;

#[derive(Default)]
pub struct DeviceDisplayConsole {
    display_buffer: DisplayBuffer,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_display(&self) {
        let border = "─".repeat(DISPLAY_WIDTH);
        println!("┌{}┐", border);
        for row in &self.display_buffer {
            println!("│{:<width$}│", row, width = DISPLAY_WIDTH);
        }
        println!("└{}┘", border);
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = DisplayBuffer::default();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        write_into(&mut self.display_buffer, line, text)
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }
}
