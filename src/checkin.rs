use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::host::Host;
use crate::http::{build_client, post_json};
use crate::models::{CheckinOutcome, CheckinRequest, CheckinResponse};
use reqwest::Client;
use tracing::info;

pub const CHECKIN_PATH: &str = "/daily_checkin";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone)]
pub struct CheckinClient {
    client: Client,
    base_url: String,
}

impl CheckinClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_client(build_client(config)?, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHECKIN_PATH)
    }

    /// Posts an empty check-in and reports the result through `host`.
    ///
    /// A failed request returns the error without touching the host.
    pub async fn daily_checkin<H>(&self, host: &H) -> Result<CheckinOutcome, ClientError>
    where
        H: Host + ?Sized,
    {
        let body = post_json(&self.client, &self.endpoint(), &CheckinRequest::default()).await?;
        let outcome = CheckinOutcome::from_response(CheckinResponse::from_value(&body));
        present(&outcome, host);
        Ok(outcome)
    }
}

/// Drives the host for a decided outcome.
pub fn present<H>(outcome: &CheckinOutcome, host: &H)
where
    H: Host + ?Sized,
{
    match outcome {
        CheckinOutcome::CheckedIn {
            points,
            streak,
            badges,
        } => {
            info!(%points, ?streak, ?badges, "checked in");
            host.alert(&format!("Checked in! Points: {points}"));
            host.reload();
        }
        CheckinOutcome::AlreadyCheckedIn { points, streak } => {
            info!(%points, ?streak, "already checked in today");
            host.alert(&format!("Already checked in today. Points: {points}"));
        }
        CheckinOutcome::LoginRequired => {
            info!("check-in requires login");
            host.alert("Please login to check-in.");
            host.navigate(LOGIN_PATH);
        }
        CheckinOutcome::Ignored { status } => {
            info!(?status, "ignoring unrecognized check-in status");
        }
    }
}
