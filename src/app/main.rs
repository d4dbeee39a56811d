use crate::acquisition::controller::AcquisitionController;
use crate::acquisition::error::AcquisitionError;
use crate::app::command::{parse_command, Command, HELP};
use crate::app::core::{init, Effect, Event, Flow};
use crate::app::render::Render;
use crate::app::run_effect::RunEffect;
use crate::classifier::interface::GenderClassifier;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::source_file::impl_disk::SourceFileDisk;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("display failed: {0}")]
    Display(Box<dyn Error + Send + Sync>),

    #[error("event channel closed")]
    ChannelClosed,
}

/// The single loop that owns the acquisition controller. Effects run on
/// worker threads and report back through the event channel.
pub struct App {
    logger: Arc<dyn Logger + Send + Sync>,
    controller: AcquisitionController,
    render: Render,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
    notice: Option<String>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Box<dyn DeviceDisplay>,
        classifier: Arc<dyn GenderClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            controller: AcquisitionController::new(
                config.acquisition,
                logger.clone(),
                device_camera,
            ),
            render: Render::new(device_display),
            run_effect: RunEffect::new(logger.clone(), classifier, event_sender),
            logger: logger.with_namespace("app"),
            event_receiver,
            notice: None,
        }
    }

    #[allow(dead_code)]
    pub fn controller(&self) -> &AcquisitionController {
        &self.controller
    }

    #[allow(dead_code)]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn run(mut self, preload: Option<Command>) -> Result<(), AppError> {
        self.render.init().map_err(AppError::Display)?;

        let mut effects = init();
        if let Some(command) = preload {
            if let Flow::Continue(more) = self.handle_command(command) {
                effects.extend(more);
            }
        }
        self.render()?;
        self.spawn_effects(effects);

        loop {
            let event = self.recv_event()?;

            match self.handle(event) {
                Flow::Continue(effects) => {
                    self.render()?;
                    self.spawn_effects(effects);
                }
                Flow::Quit => break,
            }
        }

        self.controller.reset();
        self.logger.info("Bye");
        Ok(())
    }

    pub fn handle(&mut self, event: Event) -> Flow {
        self.logger.info(&format!("Event: {:?}", event));

        match event {
            Event::Input(line) => match parse_command(&line) {
                Ok(Some(command)) => self.handle_command(command),
                Ok(None) => Flow::Continue(vec![]),
                Err(error) => {
                    self.notice = Some(error.to_string());
                    Flow::Continue(vec![])
                }
            },
            Event::InputClosed => Flow::Quit,
            Event::ClassifyDone { ticket, result } => {
                if self.controller.finish_classification(ticket, result) {
                    self.notice = None;
                }
                Flow::Continue(vec![])
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        self.notice = None;

        let effects = match command {
            Command::Upload(path) => {
                let file = SourceFileDisk::new(&path);
                if let Ok(image) = self.controller.select_file(&file) {
                    self.notice = Some(format!("Loaded {}", image.display_name()));
                }
                vec![]
            }
            Command::OpenCamera => {
                if self.controller.open_camera().is_ok() {
                    self.logger.info(&format!(
                        "Camera open with {} track(s)",
                        self.controller.camera_tracks()
                    ));
                }
                vec![]
            }
            Command::Capture => {
                if let Err(AcquisitionError::NotCapturing) = self.controller.capture_frame() {
                    self.notice = Some("Open the camera first.".to_string());
                }
                vec![]
            }
            Command::Classify => match self.controller.begin_classification() {
                Some((ticket, image)) => vec![Effect::Classify { ticket, image }],
                None => {
                    self.notice = Some(
                        if self.controller.is_classifying() {
                            "Already classifying. Please wait."
                        } else {
                            "Nothing to classify. Open an image first."
                        }
                        .to_string(),
                    );
                    vec![]
                }
            },
            Command::Reset => {
                self.controller.reset();
                vec![]
            }
            Command::Status => vec![],
            Command::Help => {
                self.notice = Some(HELP.to_string());
                vec![]
            }
            Command::Quit => return Flow::Quit,
        };

        Flow::Continue(effects)
    }

    fn render(&mut self) -> Result<(), AppError> {
        self.render
            .render(&self.controller, self.notice.as_deref())
            .map_err(AppError::Display)
    }

    pub fn recv_event(&self) -> Result<Event, AppError> {
        self.event_receiver
            .recv()
            .map_err(|_| AppError::ChannelClosed)
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
