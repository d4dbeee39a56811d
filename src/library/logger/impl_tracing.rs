use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::Arc;

/// Forwards to the global `tracing` subscriber. The namespace travels as a
/// structured field so it can be filtered on.
#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("app")
    }
}

impl Logger for LoggerTracing {
    fn info(&self, message: &str) {
        tracing::info!(namespace = self.namespace(), "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(namespace = self.namespace(), "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(namespace = self.namespace(), "{}", message);
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerTracing {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
        })
    }
}
