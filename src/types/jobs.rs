//! Job and build models returned by `/job/<name>/api/json` and the root document.

use serde::{Deserialize, Serialize};

/// A job as listed in the root document or a view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Job {
    pub name: String,
    /// Absolute URL of the job; chained calls on a bound job go through it.
    pub url: String,
    /// Ball colour (`blue`, `red_anime`, `disabled`, ...).
    pub color: Option<String>,
}

impl Job {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            color: None,
        }
    }
}

/// Reference to a build of a job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Build {
    pub number: i64,
    pub url: String,
}

/// Full job document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobWithDetails {
    pub name: String,
    pub url: String,
    pub color: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub buildable: bool,
    pub in_queue: bool,
    pub builds: Vec<Build>,
    pub first_build: Option<Build>,
    pub last_build: Option<Build>,
    pub last_completed_build: Option<Build>,
    pub last_failed_build: Option<Build>,
    pub last_stable_build: Option<Build>,
    pub last_successful_build: Option<Build>,
    pub last_unstable_build: Option<Build>,
    pub last_unsuccessful_build: Option<Build>,
    pub next_build_number: i64,
    pub upstream_projects: Vec<Job>,
    pub downstream_projects: Vec<Job>,
}

impl JobWithDetails {
    /// The summary part of this document.
    #[must_use]
    pub fn as_job(&self) -> Job {
        Job {
            name: self.name.clone(),
            url: self.url.clone(),
            color: self.color.clone(),
        }
    }

    /// `displayName` when the server sent one, otherwise `name`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Anything that identifies a job: its name and absolute URL.
///
/// Lets chained operations work the same on a listed [`Job`] and on a
/// fetched [`JobWithDetails`].
pub trait JobRef {
    fn job_name(&self) -> &str;
    fn job_url(&self) -> &str;
}

impl JobRef for Job {
    fn job_name(&self) -> &str {
        &self.name
    }

    fn job_url(&self) -> &str {
        &self.url
    }
}

impl JobRef for JobWithDetails {
    fn job_name(&self) -> &str {
        &self.name
    }

    fn job_url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_tolerate_nulls_and_unknown_fields() {
        let job: JobWithDetails = serde_json::from_str(
            r#"{
                "_class": "hudson.model.FreeStyleProject",
                "name": "nightly",
                "url": "http://ci/job/nightly/",
                "buildable": true,
                "builds": [{"number": 2, "url": "http://ci/job/nightly/2/"}],
                "lastBuild": {"number": 2, "url": "http://ci/job/nightly/2/"},
                "lastFailedBuild": null,
                "nextBuildNumber": 3,
                "downstreamProjects": [{"name": "deploy", "url": "http://ci/job/deploy/"}],
                "healthReport": []
            }"#,
        )
        .unwrap();

        assert_eq!(job.name, "nightly");
        assert!(job.buildable);
        assert_eq!(job.last_build.as_ref().map(|b| b.number), Some(2));
        assert!(job.last_failed_build.is_none());
        assert_eq!(job.next_build_number, 3);
        assert_eq!(job.downstream_projects[0].name, "deploy");
        assert_eq!(job.display_name(), "nightly");
        assert_eq!(job.as_job().url, "http://ci/job/nightly/");
    }
}
