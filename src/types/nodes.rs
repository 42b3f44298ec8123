//! Payload for `/computer/doCreateItem`.
//!
//! Field names follow the Stapler form binding Jenkins expects in the `json`
//! form field, hence the `stapler-class` and dashed property keys.

use serde::{Deserialize, Serialize};

pub const DUMB_SLAVE_DESCRIPTOR: &str = "hudson.slaves.DumbSlave$DescriptorImpl";
pub const RETENTION_ALWAYS: &str = "hudson.slaves.RetentionStrategy$Always";

const GIT_TOOL: &str = "hudson.plugins.git.GitTool$DescriptorImpl@";
const JDK_TOOL: &str = "hudson.model.JDK$DescriptorImpl@";
const MAVEN_TOOL: &str = "hudson.tasks.Maven$MavenInstallation$DescriptorImpl@";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeMode {
    /// Use this node as much as possible.
    #[default]
    Normal,
    /// Only build jobs whose label expression matches this node.
    Exclusive,
}

/// A permanent agent to create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default)]
    pub node_description: Option<String>,
    #[serde(rename = "remoteFS", default)]
    pub remote_fs: Option<String>,
    #[serde(default)]
    pub label_string: Option<String>,
    #[serde(default)]
    pub num_executors: u32,
    #[serde(default)]
    pub mode: NodeMode,
    #[serde(default)]
    pub retention_strategy: RetentionStrategy,
    #[serde(default)]
    pub node_properties: NodeProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<Launcher>,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub offline_cause_reason: Option<String>,
    #[serde(default)]
    pub temporarily_offline: bool,
}

fn default_type() -> String {
    DUMB_SLAVE_DESCRIPTOR.to_owned()
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_type(),
            node_description: None,
            remote_fs: None,
            label_string: None,
            num_executors: 1,
            mode: NodeMode::Normal,
            retention_strategy: RetentionStrategy::default(),
            node_properties: NodeProperties::default(),
            launcher: None,
            offline: false,
            offline_cause_reason: None,
            temporarily_offline: false,
        }
    }

    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.node_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn remote_fs(mut self, value: impl Into<String>) -> Self {
        self.remote_fs = Some(value.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, value: impl Into<String>) -> Self {
        self.label_string = Some(value.into());
        self
    }

    #[must_use]
    pub fn num_executors(mut self, value: u32) -> Self {
        self.num_executors = value;
        self
    }

    #[must_use]
    pub fn mode(mut self, value: NodeMode) -> Self {
        self.mode = value;
        self
    }

    #[must_use]
    pub fn launcher(mut self, value: Launcher) -> Self {
        self.launcher = Some(value);
        self
    }

    /// Add an environment variable to the node.
    pub fn add_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.node_properties.environment.env.push(EnvKeyValue {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn add_git_location(&mut self, name: &str, home: impl Into<String>) {
        self.add_tool_location(GIT_TOOL, name, home.into());
    }

    pub fn add_jdk_location(&mut self, name: &str, home: impl Into<String>) {
        self.add_tool_location(JDK_TOOL, name, home.into());
    }

    pub fn add_maven_location(&mut self, name: &str, home: impl Into<String>) {
        self.add_tool_location(MAVEN_TOOL, name, home.into());
    }

    fn add_tool_location(&mut self, descriptor: &str, name: &str, home: String) {
        self.node_properties
            .tool_locations
            .locations
            .push(ToolKeyValue {
                key: format!("{descriptor}{name}"),
                home,
            });
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionStrategy {
    #[serde(rename = "stapler-class")]
    pub stapler_class: String,
}

impl Default for RetentionStrategy {
    fn default() -> Self {
        Self {
            stapler_class: RETENTION_ALWAYS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeProperties {
    #[serde(rename = "stapler-class-bag")]
    pub stapler_class_bag: String,
    #[serde(rename = "hudson-slaves-EnvironmentVariablesNodeProperty")]
    pub environment: EnvironmentVariables,
    #[serde(rename = "hudson-tools-ToolLocationNodeProperty")]
    pub tool_locations: ToolLocations,
}

impl Default for NodeProperties {
    fn default() -> Self {
        Self {
            stapler_class_bag: "true".to_owned(),
            environment: EnvironmentVariables::default(),
            tool_locations: ToolLocations::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariables {
    #[serde(default)]
    pub env: Vec<EnvKeyValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolLocations {
    #[serde(default)]
    pub locations: Vec<ToolKeyValue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvKeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolKeyValue {
    pub key: String,
    pub home: String,
}

/// How the controller starts the agent process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stapler-class")]
pub enum Launcher {
    /// The agent connects inbound.
    #[serde(rename = "hudson.slaves.JNLPLauncher")]
    Jnlp {},
    /// The controller connects over SSH.
    #[serde(rename = "hudson.plugins.sshslaves.SSHLauncher", rename_all = "camelCase")]
    Ssh {
        host: String,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        private_key: Option<String>,
        #[serde(default)]
        credentials_id: Option<String>,
    },
}
