use crate::acquisition::core::{AcquisitionPhase, AcquisitionState, CameraSession, SubmissionTicket};
use crate::acquisition::error::AcquisitionError;
use crate::config::AcquisitionConfig;
use crate::device_camera::interface::DeviceCamera;
use crate::gender_result::GenderResult;
use crate::image_data::{is_supported_mime_type, ImageData, JPEG_MIME_TYPE};
use crate::library::logger::interface::Logger;
use crate::source_file::interface::SourceFile;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::sync::Arc;

/// Owns the single image slot and the camera while it is live.
///
/// Every transition out of [`AcquisitionState::CameraLive`] goes through
/// [`AcquisitionController::take_state`], so the session is either moved into
/// a capture or dropped, and dropping it stops the stream.
pub struct AcquisitionController {
    config: AcquisitionConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    state: AcquisitionState,
    last_error: Option<String>,
    generation: u64,
    /// The request still being answered, even if its result is already stale.
    in_flight: Option<SubmissionTicket>,
}

impl AcquisitionController {
    pub fn new(
        config: AcquisitionConfig,
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("acquisition"),
            camera,
            state: AcquisitionState::Idle,
            last_error: None,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> AcquisitionPhase {
        self.state.phase()
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.state.image()
    }

    pub fn result(&self) -> GenderResult {
        self.state.result()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True from `begin_classification` until its result arrives, whether or
    /// not that result will be kept.
    pub fn is_classifying(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn camera_tracks(&self) -> usize {
        match &self.state {
            AcquisitionState::CameraLive(session) => session.active_tracks(),
            _ => 0,
        }
    }

    pub fn select_file(&mut self, file: &dyn SourceFile) -> Result<ImageData, AcquisitionError> {
        self.clear_result();

        let image = match self.load_file(file) {
            Ok(image) => image,
            Err(error) => return Err(self.record(error)),
        };

        if let AcquisitionState::CameraLive(session) = self.take_state() {
            self.logger.info("Releasing camera before using uploaded file");
            session.release();
        }

        self.generation += 1;
        self.last_error = None;
        self.state = AcquisitionState::Selected {
            image: image.clone(),
            result: GenderResult::Unset,
        };
        self.logger.info(&format!(
            "Selected {} ({})",
            image.display_name(),
            image.mime_type()
        ));

        Ok(image)
    }

    pub fn open_camera(&mut self) -> Result<(), AcquisitionError> {
        self.reset();

        match self.camera.open(self.config.camera_facing) {
            Ok(stream) => {
                self.state = AcquisitionState::CameraLive(CameraSession::new(stream));
                self.logger.info("Camera live");
                Ok(())
            }
            Err(error) => Err(self.record(AcquisitionError::CameraUnavailable(error.to_string()))),
        }
    }

    pub fn capture_frame(&mut self) -> Result<ImageData, AcquisitionError> {
        let mut session = match self.take_state() {
            AcquisitionState::CameraLive(session) => session,
            other => {
                self.state = other;
                self.logger.warn("Capture requested while the camera is not live");
                return Err(AcquisitionError::NotCapturing);
            }
        };

        let frame = session.grab_frame();
        session.release();

        let image = frame
            .map_err(|error| error.to_string())
            .and_then(|frame| encode_jpeg(frame).map_err(|error| error.to_string()))
            .map(|bytes| ImageData::from_bytes(&bytes, JPEG_MIME_TYPE, Some(capture_name())));

        match image {
            Ok(image) => {
                self.generation += 1;
                self.state = AcquisitionState::Selected {
                    image: image.clone(),
                    result: GenderResult::Unset,
                };
                self.logger
                    .info(&format!("Captured {}", image.display_name()));
                Ok(image)
            }
            Err(message) => Err(self.record(AcquisitionError::CameraUnavailable(message))),
        }
    }

    pub fn reset(&mut self) {
        if let AcquisitionState::CameraLive(session) = self.take_state() {
            session.release();
        }
        self.last_error = None;
        self.generation += 1;
    }

    /// Moves `Selected` to `Submitted`, clearing the previous result. Returns
    /// `None` without touching anything when no image is ready or a request
    /// is already in flight, including one for an image that was since
    /// replaced or reset.
    pub fn begin_classification(&mut self) -> Option<(SubmissionTicket, ImageData)> {
        if let Some(ticket) = self.in_flight {
            self.logger
                .info(&format!("Refusing to classify while {:?} is in flight", ticket));
            return None;
        }

        match self.take_state() {
            AcquisitionState::Selected { image, .. } => {
                self.generation += 1;
                let ticket = SubmissionTicket(self.generation);
                self.in_flight = Some(ticket);
                self.last_error = None;
                self.state = AcquisitionState::Submitted {
                    image: image.clone(),
                    ticket,
                };
                Some((ticket, image))
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Commits `result` if `ticket` still names the in-flight request.
    pub fn finish_classification(&mut self, ticket: SubmissionTicket, result: GenderResult) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }

        match self.take_state() {
            AcquisitionState::Submitted {
                image,
                ticket: current,
            } if current == ticket => {
                self.state = AcquisitionState::Selected { image, result };
                true
            }
            other => {
                self.state = other;
                self.logger
                    .info(&format!("Discarding stale result {} for {:?}", result, ticket));
                false
            }
        }
    }

    fn load_file(&self, file: &dyn SourceFile) -> Result<ImageData, AcquisitionError> {
        let content_type = file.content_type();
        if !is_supported_mime_type(&content_type) {
            return Err(AcquisitionError::InvalidFileType { content_type });
        }

        let limit = self.config.max_file_bytes;
        if file.size() > limit {
            return Err(AcquisitionError::FileTooLarge {
                size: file.size(),
                limit,
            });
        }

        let bytes = file.read().map_err(AcquisitionError::FileReadFailure)?;
        if bytes.len() as u64 > limit {
            return Err(AcquisitionError::FileTooLarge {
                size: bytes.len() as u64,
                limit,
            });
        }

        Ok(ImageData::from_bytes(&bytes, &content_type, file.name()))
    }

    fn clear_result(&mut self) {
        if let AcquisitionState::Selected { result, .. } = &mut self.state {
            *result = GenderResult::Unset;
        }
    }

    fn take_state(&mut self) -> AcquisitionState {
        std::mem::take(&mut self.state)
    }

    fn record(&mut self, error: AcquisitionError) -> AcquisitionError {
        self.logger.warn(&error.to_string());
        self.last_error = Some(error.to_string());
        error
    }
}

impl Drop for AcquisitionController {
    fn drop(&mut self) {
        if let AcquisitionState::CameraLive(session) = self.take_state() {
            self.logger.info("Releasing camera on shutdown");
            session.release();
        }
    }
}

fn encode_jpeg(frame: RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(frame).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;
    Ok(bytes)
}

fn capture_name() -> String {
    format!(
        "camera-capture-{}.jpg",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}
