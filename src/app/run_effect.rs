use crate::app::core::{Effect, Event};
use crate::classifier::interface::GenderClassifier;
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<dyn GenderClassifier + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn GenderClassifier + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            classifier,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        self.logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeCommands => {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    match line {
                        Ok(line) => {
                            if self.event_sender.send(Event::Input(line)).is_err() {
                                return;
                            }
                        }
                        Err(error) => {
                            self.logger.warn(&format!("Failed to read input: {}", error));
                            break;
                        }
                    }
                }
                let _ = self.event_sender.send(Event::InputClosed);
            }
            Effect::Classify { ticket, image } => {
                let result = self.classifier.classify(&image);
                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone { ticket, result });
            }
        }
    }
}
