use serde::{Deserialize, Serialize};

/// Chat bodies use the silent-refusal rule for whitespace, so there is
/// no Validate impl here.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub body: String,
}
