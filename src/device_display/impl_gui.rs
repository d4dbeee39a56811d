use crate::device_display::interface::{write_into, DeviceDisplay, DisplayBuffer};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The window side of [`DeviceDisplayGui`]. winit only creates event loops on
/// the main thread, so `run` must be called there.
pub struct DisplayWindow {
    display_buffer: Arc<Mutex<DisplayBuffer>>,
    closed: Arc<AtomicBool>,
}

impl DisplayWindow {
    /// Blocks until the window is closed by the user or the display is dropped.
    pub fn run(self) -> Result<(), String> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([520.0, 220.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native("Gender Lens", options, Box::new(|_cc| Box::new(self)))
            .map_err(|error| error.to_string())
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.closed.load(Ordering::SeqCst) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let lines = match self.display_buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);

                let rect = ui.available_rect_before_wrap();
                ui.painter()
                    .rect_filled(rect, 4.0, egui::Color32::from_rgb(30, 34, 42));
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(90, 100, 120)),
                );

                for (index, line) in lines.iter().enumerate() {
                    let size = if index == 2 { 24.0 } else { 16.0 };
                    ui.label(
                        egui::RichText::new(line)
                            .monospace()
                            .color(egui::Color32::WHITE)
                            .size(size),
                    );
                }
            });
        });

        // State changes arrive from the app thread, so poll for them.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

#[derive(Default)]
pub struct DeviceDisplayGui {
    pending: DisplayBuffer,
    display_buffer: Arc<Mutex<DisplayBuffer>>,
    closed: Arc<AtomicBool>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> DisplayWindow {
        DisplayWindow {
            display_buffer: self.display_buffer.clone(),
            closed: self.closed.clone(),
        }
    }
}

impl Drop for DeviceDisplayGui {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl DeviceDisplay for DeviceDisplayGui {
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
        let mut buffer = self
            .display_buffer
            .lock()
            .map_err(|_| "display buffer poisoned")?;
        *buffer = self.pending.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_hands_lines_to_the_window() {
        let mut display = DeviceDisplayGui::new();
        let window = display.window();

        display.write_line(0, "Ready").unwrap();
        assert_eq!(window.display_buffer.lock().unwrap()[0], "");

        display.flush().unwrap();
        assert_eq!(window.display_buffer.lock().unwrap()[0], "Ready");
    }

    #[test]
    fn dropping_the_display_closes_the_window() {
        let display = DeviceDisplayGui::new();
        let window = display.window();
        assert!(!window.closed.load(Ordering::SeqCst));

        drop(display);

        assert!(window.closed.load(Ordering::SeqCst));
    }
}
