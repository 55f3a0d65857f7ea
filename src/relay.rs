use std::io::{self, Write};
use std::process::ExitCode;

use tracing::info;

use crate::config::Config;
use crate::error::RelayError;
use crate::gateway::MessageGateway;
use crate::model::{KNOWN_MODELS, RequestParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Sends one prompt through a gateway and reports the outcome.
pub struct Relay<'a, G> {
    cfg: &'a Config,
    gateway: G,
}

impl<'a, G> Relay<'a, G>
where
    G: MessageGateway,
{
    pub fn new(cfg: &'a Config, gateway: G) -> Self {
        Self { cfg, gateway }
    }

    /// Resolves the credential before touching the gateway, then calls it once.
    pub async fn send(&self, params: &RequestParams) -> Result<String, RelayError> {
        let Some(api_key) = self.cfg.api_key.as_ref() else {
            info!("no credential configured; skipping request");
            return Err(RelayError::MissingCredential);
        };

        let response = self.gateway.create_message(api_key, params).await?;
        info!(
            model = %params.model,
            response_len = response.text.len(),
            "relay completed"
        );
        Ok(response.text)
    }

    pub async fn run<W: Write>(&self, params: &RequestParams, out: &mut W) -> io::Result<Status> {
        let result = self.send(params).await;
        report(&result, out)
    }
}

/// Writes the relay outcome to `out`. Diagnostics share the product stream.
pub fn report<W: Write>(result: &Result<String, RelayError>, out: &mut W) -> io::Result<Status> {
    match result {
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(Status::Success)
        }
        Err(err @ RelayError::MissingCredential) => {
            writeln!(out, "Error: {err}")?;
            Ok(Status::Failure)
        }
        Err(err @ RelayError::Request(_)) => {
            writeln!(out)?;
            writeln!(out, "Available models include:")?;
            for model in KNOWN_MODELS {
                writeln!(out, "  - {model}")?;
            }
            writeln!(out)?;
            writeln!(out, "Error: {err}")?;
            Ok(Status::Failure)
        }
    }
}
