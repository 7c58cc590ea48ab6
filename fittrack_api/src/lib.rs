mod cancel;
mod client;
mod envelope;
mod errors;
mod loading;
pub mod types;

pub use self::cancel::CancelToken;
pub use self::client::{resolve_endpoint, Client, RequestOptions, DEFAULT_BASE_URL};
pub use self::envelope::unwrap_envelope;
pub use self::errors::Error;
pub use self::loading::{LoadingGuard, LoadingTracker};
