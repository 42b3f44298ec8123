use super::Job;
use serde::{Deserialize, Serialize};

/// A view document (`/view/<name>/api/json`) or a view entry of the root document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct View {
    pub name: String,
    pub description: Option<String>,
    pub jobs: Vec<Job>,
    pub url: String,
    pub properties: Vec<serde_json::Value>,
}

/// The part of a list view's `config.xml` that names its member jobs.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ViewConfig {
    pub(crate) job_names: JobNames,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JobNames {
    pub(crate) string: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_config_collects_job_names() {
        let xml = r#"<?xml version="1.1" encoding="UTF-8"?>
<hudson.model.ListView>
  <name>team</name>
  <filterExecutors>false</filterExecutors>
  <properties class="hudson.model.View$PropertyList"/>
  <jobNames>
    <comparator class="hudson.util.CaseInsensitiveComparator"/>
    <string>api build</string>
    <string>deploy</string>
  </jobNames>
  <recurse>false</recurse>
</hudson.model.ListView>"#;

        let config: ViewConfig = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(config.job_names.string, ["api build", "deploy"]);
    }

    #[test]
    fn view_config_without_members_is_empty() {
        let config: ViewConfig =
            quick_xml::de::from_str("<hudson.model.AllView><name>all</name></hudson.model.AllView>")
                .unwrap();
        assert!(config.job_names.string.is_empty());
    }
}
