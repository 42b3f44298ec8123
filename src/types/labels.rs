use super::Job;
use serde::Deserialize;

/// `/label/<name>/api/json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelWithDetails {
    pub name: String,
    pub description: Option<String>,
    pub busy_executors: u32,
    pub idle_executors: u32,
    pub total_executors: u32,
    pub offline: bool,
    pub nodes: Vec<LabelNode>,
    pub tied_jobs: Vec<Job>,
}

/// A node carrying the label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelNode {
    pub node_name: String,
    pub node_description: Option<String>,
}
