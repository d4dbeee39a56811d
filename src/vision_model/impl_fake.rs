use crate::vision_model::interface::{VisionModel, VisionModelError, VisionRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// Answers every request with the same scripted reply and records what it
/// was asked.
#[derive(Debug, Clone)]
pub struct VisionModelFake {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<VisionRequest>>>,
}

impl VisionModelFake {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<VisionRequest> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }
}

impl VisionModel for VisionModelFake {
    fn generate(&self, _api_key: &str, request: &VisionRequest) -> Result<String, VisionModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(VisionModelError::Transport(message.clone())),
        }
    }
}
