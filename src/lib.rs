pub mod checkin;
pub mod config;
pub mod errors;
pub mod host;
pub mod http;
pub mod models;

pub use checkin::CheckinClient;
pub use config::ClientConfig;
pub use errors::ClientError;
pub use host::{Host, RecordingHost, TerminalHost};
pub use http::post_json;
pub use models::CheckinOutcome;
