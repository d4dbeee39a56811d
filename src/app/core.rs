use crate::acquisition::core::SubmissionTicket;
use crate::gender_result::GenderResult;
use crate::image_data::ImageData;

#[derive(Debug)]
pub enum Event {
    Input(String),
    InputClosed,
    ClassifyDone {
        ticket: SubmissionTicket,
        result: GenderResult,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeCommands,
    Classify {
        ticket: SubmissionTicket,
        image: ImageData,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { ticket, image } => format!(
                "Classify {{ ticket: {:?}, image: {} ({}) }}",
                ticket,
                image.display_name(),
                image.mime_type()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> Vec<Effect> {
    vec![Effect::SubscribeCommands]
}

/// Whether the loop keeps going after an event.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Continue(Vec<Effect>),
    Quit,
}
