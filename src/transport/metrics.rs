//! Request metrics, labelled by what the status policy made of each response.

use crate::ErrorKind;
use http::{Method, StatusCode};
use metrics::SharedString;
use std::time::Duration;

const REQUESTS: &str = "jenkins_remote_requests_total";
const DURATION: &str = "jenkins_remote_request_duration_seconds";
const PENDING: &str = "jenkins_remote_requests_pending";

/// How a request ended as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Status in `[200, 400)`.
    Found,
    /// A 404 handed back as `None`.
    Absent,
    Failed(ErrorKind),
}

impl Outcome {
    fn label(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Absent => "absent",
            Self::Failed(kind) => match kind {
                ErrorKind::Auth => "auth",
                ErrorKind::NotFound => "not_found",
                ErrorKind::Conflict => "conflict",
                ErrorKind::RateLimited => "rate_limited",
                ErrorKind::Api => "api",
                ErrorKind::Transport => "transport",
                ErrorKind::Decode => "decode",
                ErrorKind::Encode => "encode",
                ErrorKind::InvalidConfig => "invalid_config",
            },
        }
    }
}

/// Holds the pending-requests gauge up until dropped.
pub(crate) struct Pending(metrics::Gauge);

impl Pending {
    pub(crate) fn start() -> Self {
        let gauge = metrics::gauge!(PENDING);
        gauge.increment(1.0);
        Self(gauge)
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        self.0.decrement(1.0);
    }
}

pub(crate) fn record(
    method: &Method,
    status: Option<StatusCode>,
    outcome: Outcome,
    latency: Duration,
) {
    let method = SharedString::from(method.as_str().to_owned());
    // No status means the server never answered.
    let status = match status {
        Some(status) => SharedString::from(status.as_str().to_owned()),
        None => SharedString::from("none"),
    };
    let outcome = outcome.label();

    metrics::counter!(
        REQUESTS,
        "method" => method.clone(),
        "status" => status,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!(DURATION, "method" => method, "outcome" => outcome).record(latency);
}
