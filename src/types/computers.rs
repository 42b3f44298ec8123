use serde::{Deserialize, Serialize};

/// An agent as reported by `/computer/<name>/api/json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Computer {
    pub display_name: String,
    pub description: Option<String>,
    pub num_executors: u32,
    pub offline: bool,
    pub offline_cause_reason: Option<String>,
    pub temporarily_offline: bool,
    pub idle: bool,
    pub jnlp_agent: bool,
    pub assigned_labels: Vec<AssignedLabel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AssignedLabel {
    pub name: String,
}

/// `/computer/api/json`: every agent plus executor totals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComputerSet {
    pub busy_executors: u32,
    pub total_executors: u32,
    #[serde(rename = "computer")]
    pub computers: Vec<Computer>,
    pub display_name: Option<String>,
}

/// Class reference carried as an attribute, e.g. `<launcher class="hudson.slaves.JNLPLauncher"/>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct ClassRef {
    #[serde(rename = "@class", default)]
    pub class: Option<String>,
}

/// A node's `config.xml` (root element `<slave>`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComputerConfig {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "remoteFS")]
    pub remote_fs: Option<String>,
    pub num_executors: u32,
    pub mode: Option<String>,
    pub retention_strategy: Option<ClassRef>,
    pub launcher: Option<ClassRef>,
    pub label: Option<String>,
    pub user_id: Option<String>,
}

impl ComputerConfig {
    /// Labels split on whitespace.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.label.as_deref().unwrap_or_default().split_whitespace()
    }
}
