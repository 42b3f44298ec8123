use crate::{Bound, Error, Job, JobName, JobRef, JobWithDetails, MainView, util::url::url_join};
use std::collections::HashMap;

fn job_path(job: &JobName) -> String {
    format!("/job/{}", job.encoded())
}

fn config_path(job: &JobName) -> String {
    format!("{}/config.xml", job_path(job))
}

fn delete_path(job: &JobName) -> String {
    format!("{}/doDelete", job_path(job))
}

fn create_path(job: &JobName) -> String {
    format!("/createItem?name={}", job.encoded())
}

/// Where chained calls on a bound job go: its absolute URL, or `/job/<name>` when the
/// server did not send one.
fn bound_job_path(job: &impl JobRef) -> String {
    match job.job_url() {
        "" => job_path(&JobName::from(job.job_name())),
        url => url.to_owned(),
    }
}

/// Index jobs by lowercase name; the values keep their original casing.
fn index_jobs<C: Clone>(main: Option<Bound<MainView, C>>) -> HashMap<String, Bound<Job, C>> {
    let Some(main) = main else {
        return HashMap::new();
    };
    let (main, client) = main.into_parts();
    main.jobs
        .into_iter()
        .map(|job| (job.name.to_lowercase(), Bound::new(job, client.clone())))
        .collect()
}

/// Jenkins jobs APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct JobsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl JobsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl JobsService {
    /// `GET /api/json`: every top-level job keyed by lowercase name.
    pub async fn list(&self) -> Result<HashMap<String, Bound<Job, crate::Client>>, Error> {
        Ok(index_jobs(self.client.get::<MainView>("/").await?))
    }

    /// `GET /job/<name>/api/json`. `None` when the job does not exist.
    pub async fn get(
        &self,
        job: impl Into<JobName>,
    ) -> Result<Option<Bound<JobWithDetails, crate::Client>>, Error> {
        self.client.get(&job_path(&job.into())).await
    }

    /// `POST /createItem?name=<name>` with the job's `config.xml`.
    pub async fn create(&self, job: impl Into<JobName>, xml: &str) -> Result<(), Error> {
        self.client.post_xml(&create_path(&job.into()), xml).await?;
        Ok(())
    }

    /// `GET /job/<name>/config.xml`. `None` when the job does not exist.
    pub async fn config_xml(&self, job: impl Into<JobName>) -> Result<Option<String>, Error> {
        self.client.get_raw_text(&config_path(&job.into())).await
    }

    /// `POST /job/<name>/config.xml` replacing the job's configuration.
    pub async fn update(&self, job: impl Into<JobName>, xml: &str) -> Result<(), Error> {
        self.client.post_xml(&config_path(&job.into()), xml).await?;
        Ok(())
    }

    /// `POST /job/<name>/doDelete`
    pub async fn delete(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client.post_empty(&delete_path(&job.into())).await
    }
}

#[cfg(feature = "async")]
impl<J: JobRef> Bound<J, crate::Client> {
    /// Fetch the full job document through the job's own URL.
    pub async fn details(&self) -> Result<Option<Bound<JobWithDetails, crate::Client>>, Error> {
        self.client().get(&bound_job_path(self.data())).await
    }

    pub async fn config_xml(&self) -> Result<Option<String>, Error> {
        let path = url_join(&bound_job_path(self.data()), "config.xml");
        self.client().get_raw_text(&path).await
    }

    pub async fn update(&self, xml: &str) -> Result<(), Error> {
        let path = url_join(&bound_job_path(self.data()), "config.xml");
        self.client().post_xml(&path, xml).await?;
        Ok(())
    }

    pub async fn delete(&self) -> Result<(), Error> {
        let path = url_join(&bound_job_path(self.data()), "doDelete");
        self.client().post_empty(&path).await
    }
}

/// Jenkins jobs APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingJobsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingJobsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingJobsService {
    /// `GET /api/json`: every top-level job keyed by lowercase name.
    pub fn list(&self) -> Result<HashMap<String, Bound<Job, crate::BlockingClient>>, Error> {
        Ok(index_jobs(self.client.get::<MainView>("/")?))
    }

    /// `GET /job/<name>/api/json`. `None` when the job does not exist.
    pub fn get(
        &self,
        job: impl Into<JobName>,
    ) -> Result<Option<Bound<JobWithDetails, crate::BlockingClient>>, Error> {
        self.client.get(&job_path(&job.into()))
    }

    /// `POST /createItem?name=<name>` with the job's `config.xml`.
    pub fn create(&self, job: impl Into<JobName>, xml: &str) -> Result<(), Error> {
        self.client.post_xml(&create_path(&job.into()), xml)?;
        Ok(())
    }

    /// `GET /job/<name>/config.xml`. `None` when the job does not exist.
    pub fn config_xml(&self, job: impl Into<JobName>) -> Result<Option<String>, Error> {
        self.client.get_raw_text(&config_path(&job.into()))
    }

    /// `POST /job/<name>/config.xml` replacing the job's configuration.
    pub fn update(&self, job: impl Into<JobName>, xml: &str) -> Result<(), Error> {
        self.client.post_xml(&config_path(&job.into()), xml)?;
        Ok(())
    }

    /// `POST /job/<name>/doDelete`
    pub fn delete(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client.post_empty(&delete_path(&job.into()))
    }
}

#[cfg(feature = "blocking")]
impl<J: JobRef> Bound<J, crate::BlockingClient> {
    /// Fetch the full job document through the job's own URL.
    pub fn details(&self) -> Result<Option<Bound<JobWithDetails, crate::BlockingClient>>, Error> {
        self.client().get(&bound_job_path(self.data()))
    }

    pub fn config_xml(&self) -> Result<Option<String>, Error> {
        let path = url_join(&bound_job_path(self.data()), "config.xml");
        self.client().get_raw_text(&path)
    }

    pub fn update(&self, xml: &str) -> Result<(), Error> {
        let path = url_join(&bound_job_path(self.data()), "config.xml");
        self.client().post_xml(&path, xml)?;
        Ok(())
    }

    pub fn delete(&self) -> Result<(), Error> {
        let path = url_join(&bound_job_path(self.data()), "doDelete");
        self.client().post_empty(&path)
    }
}
