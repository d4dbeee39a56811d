use crate::app::main::App;
use crate::classifier::impl_vision::GenderClassifierVision;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::library::logger::impl_fake::LoggerFake;
use crate::vision_model::impl_fake::VisionModelFake;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

#[allow(dead_code)]
pub struct Fixture {
    pub logger: LoggerFake,
    pub camera: Arc<DeviceCameraFake>,
    pub display: DeviceDisplayFake,
    pub model: VisionModelFake,
    pub app: App,
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(reply: &str) -> Self {
        Self::build(Some("test-key"), VisionModelFake::replying(reply))
    }

    pub fn without_credential() -> Self {
        Self::build(None, VisionModelFake::replying("Male"))
    }

    fn build(api_key: Option<&str>, model: VisionModelFake) -> Self {
        let config = Config::default();
        let logger = LoggerFake::new();
        let camera = Arc::new(DeviceCameraFake::new(Arc::new(logger.clone())));
        let display = DeviceDisplayFake::new();
        let classifier = Arc::new(GenderClassifierVision::new(
            api_key.map(str::to_string),
            Arc::new(model.clone()),
            Arc::new(logger.clone()),
        ));
        let app = App::new(
            config,
            Arc::new(logger.clone()),
            camera.clone(),
            Box::new(display.clone()),
            classifier,
        );

        Self {
            logger,
            camera,
            display,
            model,
            app,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }
}
