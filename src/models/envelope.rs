use serde::{Deserialize, Serialize};

/// Wire wrapper the API uses for collection responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub payload: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn new(payload: Vec<T>) -> Self {
        Self { payload }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.payload
    }
}
