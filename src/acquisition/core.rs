use crate::device_camera::interface::CameraStream;
use crate::gender_result::GenderResult;
use crate::image_data::ImageData;
use image::RgbImage;
use std::error::Error;
use std::fmt;

/// Identifies one classification request. A result is only committed when
/// its ticket is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(pub(crate) u64);

/// Exclusive owner of an open camera stream. Dropping it stops the stream.
pub struct CameraSession {
    stream: Box<dyn CameraStream>,
}

impl CameraSession {
    pub fn new(stream: Box<dyn CameraStream>) -> Self {
        Self { stream }
    }

    pub fn grab_frame(&mut self) -> Result<RgbImage, Box<dyn Error + Send + Sync>> {
        self.stream.grab_frame()
    }

    pub fn active_tracks(&self) -> usize {
        self.stream.active_tracks()
    }

    pub fn release(mut self) {
        self.stream.stop();
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stream.stop();
    }
}

impl fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraSession")
            .field("active_tracks", &self.stream.active_tracks())
            .finish()
    }
}

#[derive(Debug, Default)]
pub enum AcquisitionState {
    #[default]
    Idle,
    CameraLive(CameraSession),
    Selected {
        image: ImageData,
        result: GenderResult,
    },
    Submitted {
        image: ImageData,
        ticket: SubmissionTicket,
    },
}

/// Payload-free view of [`AcquisitionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionPhase {
    Idle,
    CameraLive,
    Selected,
    Submitted,
}

impl AcquisitionState {
    pub fn phase(&self) -> AcquisitionPhase {
        match self {
            AcquisitionState::Idle => AcquisitionPhase::Idle,
            AcquisitionState::CameraLive(_) => AcquisitionPhase::CameraLive,
            AcquisitionState::Selected { .. } => AcquisitionPhase::Selected,
            AcquisitionState::Submitted { .. } => AcquisitionPhase::Submitted,
        }
    }

    pub fn image(&self) -> Option<&ImageData> {
        match self {
            AcquisitionState::Selected { image, .. } | AcquisitionState::Submitted { image, .. } => {
                Some(image)
            }
            AcquisitionState::Idle | AcquisitionState::CameraLive(_) => None,
        }
    }

    pub fn result(&self) -> GenderResult {
        match self {
            AcquisitionState::Selected { result, .. } => *result,
            _ => GenderResult::Unset,
        }
    }
}
