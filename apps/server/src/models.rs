use serde::{Deserialize, Serialize};

/// Envelope for successful responses: `{"docs": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocsResponse<T> {
    pub docs: T,
}

impl<T> DocsResponse<T> {
    pub fn new(docs: T) -> Self {
        Self { docs }
    }
}
