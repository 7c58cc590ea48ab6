use serde::{Deserialize, Serialize};

/// Wire envelope some endpoints wrap their payloads in. Unwrapping is handled
/// transparently by the client; this type exists for code that produces
/// enveloped payloads (servers, test fixtures).
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}
