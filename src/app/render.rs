use crate::acquisition::controller::AcquisitionController;
use crate::acquisition::core::AcquisitionPhase;
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct Render {
    device_display: Box<dyn DeviceDisplay>,
}

impl Render {
    pub fn new(device_display: Box<dyn DeviceDisplay>) -> Self {
        Self { device_display }
    }

    pub fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.device_display.init()
    }

    pub fn render(
        &mut self,
        controller: &AcquisitionController,
        notice: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let display = &mut self.device_display;

        display.clear()?;

        let status = match controller.phase() {
            AcquisitionPhase::Idle => "Ready. Open an image or the camera.",
            AcquisitionPhase::CameraLive => "Camera live. Type 'capture'.",
            AcquisitionPhase::Selected => "Image ready. Type 'classify'.",
            AcquisitionPhase::Submitted => "Classifying...",
        };
        display.write_line(0, status)?;

        if let Some(image) = controller.image() {
            display.write_line(
                1,
                &format!("Image: {} ({})", image.display_name(), image.mime_type()),
            )?;
        }

        let result = controller.result();
        if result.is_set() {
            display.write_line(2, result.message())?;
        }

        match (controller.last_error(), notice) {
            (Some(error), _) => display.write_line(3, &format!("Error: {}", error))?,
            (None, Some(notice)) => display.write_line(3, notice)?,
            (None, None) => {}
        }

        display.flush()
    }
}
