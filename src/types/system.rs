use super::{ComputerConfig, Job, View};
use crate::Error;
use http::{HeaderName, HeaderValue};
use serde::Deserialize;

/// JSON payload of `GET /crumbIssuer/api/json`.
#[derive(Clone, Debug, Deserialize)]
#[non_exhaustive]
pub struct Crumb {
    #[serde(rename = "crumbRequestField")]
    pub crumb_request_field: String,
    pub crumb: String,
}

impl Crumb {
    /// The header this crumb is sent as (`Jenkins-Crumb: <value>` on stock servers).
    pub(crate) fn header(&self) -> Result<(HeaderName, HeaderValue), Error> {
        let name = HeaderName::try_from(self.crumb_request_field.as_str()).map_err(|err| {
            Error::InvalidConfig {
                message: "crumb issuer returned an invalid header name".into(),
                source: Some(Box::new(err)),
            }
        })?;
        let value = HeaderValue::try_from(self.crumb.as_str()).map_err(|err| {
            Error::InvalidConfig {
                message: "crumb issuer returned an invalid header value".into(),
                source: Some(Box::new(err)),
            }
        })?;
        Ok((name, value))
    }
}

/// The root document (`/api/json`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MainView {
    pub jobs: Vec<Job>,
    pub views: Vec<View>,
    pub description: Option<String>,
    pub mode: Option<String>,
    pub node_description: Option<String>,
    pub node_name: Option<String>,
    pub num_executors: u32,
    pub primary_view: Option<View>,
    pub quieting_down: bool,
    pub slave_agent_port: i32,
    pub use_crumbs: bool,
    pub use_security: bool,
}

/// The controller's `config.xml` (root element `<hudson>`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MasterConfig {
    pub version: Option<String>,
    pub num_executors: Option<u32>,
    pub mode: Option<String>,
    pub use_security: Option<bool>,
    pub project_naming_strategy: Option<String>,
    pub workspace_dir: Option<String>,
    pub builds_dir: Option<String>,
    pub quiet_period: Option<u32>,
    pub scm_checkout_retry_count: Option<u32>,
    pub primary_view: Option<String>,
    pub slave_agent_port: Option<i32>,
    pub label: Option<String>,
    pub jdks: JdkList,
    pub slaves: AgentList,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JdkList {
    pub jdk: Vec<Jdk>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Jdk {
    pub name: String,
    pub home: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AgentList {
    pub slave: Vec<ComputerConfig>,
}
