use image::RgbImage;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Back,
}

/// An open video stream. Holding one means the device is in use.
pub trait CameraStream: Send {
    fn grab_frame(&mut self) -> Result<RgbImage, Box<dyn Error + Send + Sync>>;

    /// Stops every underlying track. Calling it again is a no-op.
    fn stop(&mut self);

    fn active_tracks(&self) -> usize;
}

pub trait DeviceCamera: Send + Sync {
    fn open(
        &self,
        facing: CameraFacing,
    ) -> Result<Box<dyn CameraStream>, Box<dyn Error + Send + Sync>>;
}
