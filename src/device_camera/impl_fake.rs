use crate::device_camera::interface::{CameraFacing, CameraStream, DeviceCamera};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use rand::Rng;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    available: bool,
    frame_size: (u32, u32),
    open_tracks: Arc<AtomicUsize>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            available: true,
            frame_size: (64, 48),
            open_tracks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A camera that refuses every open, like a denied permission prompt.
    pub fn unavailable(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            available: false,
            ..Self::new(logger)
        }
    }

    /// Tracks currently running across every stream this camera handed out.
    #[allow(dead_code)]
    pub fn open_tracks(&self) -> usize {
        self.open_tracks.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn open(
        &self,
        facing: CameraFacing,
    ) -> Result<Box<dyn CameraStream>, Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("Opening {:?} camera...", facing));

        if !self.available {
            return Err("camera permission denied".into());
        }

        self.open_tracks.fetch_add(1, Ordering::SeqCst);
        self.logger.info("Camera stream started");

        Ok(Box::new(FakeCameraStream {
            logger: self.logger.clone(),
            frame_size: self.frame_size,
            tracks: 1,
            open_tracks: self.open_tracks.clone(),
        }))
    }
}

struct FakeCameraStream {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_size: (u32, u32),
    tracks: usize,
    open_tracks: Arc<AtomicUsize>,
}

impl CameraStream for FakeCameraStream {
    fn grab_frame(&mut self) -> Result<RgbImage, Box<dyn Error + Send + Sync>> {
        if self.tracks == 0 {
            return Err("camera stream already stopped".into());
        }

        let (width, height) = self.frame_size;
        let mut pixels = vec![0u8; (width * height * 3) as usize];
        rand::rng().fill(&mut pixels[..]);

        self.logger.info("Frame captured");

        RgbImage::from_raw(width, height, pixels).ok_or_else(|| "frame buffer size mismatch".into())
    }

    fn stop(&mut self) {
        if self.tracks == 0 {
            return;
        }
        self.open_tracks.fetch_sub(self.tracks, Ordering::SeqCst);
        self.tracks = 0;
        self.logger.info("Camera stream stopped");
    }

    fn active_tracks(&self) -> usize {
        self.tracks
    }
}

impl Drop for FakeCameraStream {
    fn drop(&mut self) {
        self.stop();
    }
}
