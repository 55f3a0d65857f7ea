use std::error::Error as StdError;
use std::io::ErrorKind;

use crate::error::RequestFailure;

fn error_chain_matches(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }

        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }

        current = source.source();
    }

    false
}

fn error_chain_has_connection_refused(err: &(dyn StdError + 'static)) -> bool {
    error_chain_matches(err, ErrorKind::ConnectionRefused, "connection refused")
}

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    error_chain_matches(err, ErrorKind::TimedOut, "timed out")
}

pub(crate) fn request_failure(err: reqwest::Error, api_url: &str) -> RequestFailure {
    let url = api_url.to_string();

    if err.is_timeout() || error_chain_has_timeout(&err) {
        return RequestFailure::Timeout { url };
    }

    if err.is_connect() {
        if error_chain_has_connection_refused(&err) {
            return RequestFailure::ConnectionRefused { url };
        }
        return RequestFailure::Connect { url };
    }

    RequestFailure::Transport { url, source: err }
}
