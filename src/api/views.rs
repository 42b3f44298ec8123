use crate::{Bound, Error, JobName, MainView, View, ViewName, types::ViewConfig};
use std::collections::HashMap;

fn view_path(view: &ViewName) -> String {
    format!("/view/{}", view.encoded())
}

fn config_path(view: &ViewName) -> String {
    format!("{}/config.xml", view_path(view))
}

fn membership_path(view: &ViewName, action: &str, job: &JobName) -> String {
    format!("{}/{action}?name={}", view_path(view), job.encoded())
}

fn index_views<C: Clone>(main: Option<Bound<MainView, C>>) -> HashMap<String, Bound<View, C>> {
    let Some(main) = main else {
        return HashMap::new();
    };
    let (main, client) = main.into_parts();
    main.views
        .into_iter()
        .map(|view| (view.name.to_lowercase(), Bound::new(view, client.clone())))
        .collect()
}

fn job_names(config: Option<ViewConfig>) -> Vec<String> {
    config
        .map(|config| config.job_names.string)
        .unwrap_or_default()
}

/// Jenkins views APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct ViewsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl ViewsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl ViewsService {
    /// `GET /view/<name>/api/json`
    pub async fn get(
        &self,
        view: impl Into<ViewName>,
    ) -> Result<Option<Bound<View, crate::Client>>, Error> {
        self.client.get(&view_path(&view.into())).await
    }

    /// Views of the root document keyed by lowercase name.
    pub async fn list(&self) -> Result<HashMap<String, Bound<View, crate::Client>>, Error> {
        Ok(index_views(self.client.get::<MainView>("/").await?))
    }

    /// `POST /view/<view>/addJobToView?name=<job>`
    pub async fn add_job(
        &self,
        view: impl Into<ViewName>,
        job: impl Into<JobName>,
    ) -> Result<(), Error> {
        let path = membership_path(&view.into(), "addJobToView", &job.into());
        self.client.post_form::<&str, &str>(&path, &[]).await?;
        Ok(())
    }

    /// `POST /view/<view>/removeJobFromView?name=<job>`
    pub async fn remove_job(
        &self,
        view: impl Into<ViewName>,
        job: impl Into<JobName>,
    ) -> Result<(), Error> {
        let path = membership_path(&view.into(), "removeJobFromView", &job.into());
        self.client.post_form::<&str, &str>(&path, &[]).await?;
        Ok(())
    }

    /// Names of the jobs listed in the view's `config.xml`.
    ///
    /// Views without explicit membership (e.g. the "all" view) yield no names.
    pub async fn jobs_on_view(&self, view: impl Into<ViewName>) -> Result<Vec<String>, Error> {
        let config = self
            .client
            .get_xml_document::<ViewConfig>(&config_path(&view.into()))
            .await?;
        Ok(job_names(config))
    }
}

#[cfg(feature = "async")]
impl Bound<View, crate::Client> {
    pub async fn jobs_on_view(&self) -> Result<Vec<String>, Error> {
        self.client().views().jobs_on_view(self.name.as_str()).await
    }

    pub async fn add_job(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client().views().add_job(self.name.as_str(), job).await
    }

    pub async fn remove_job(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client().views().remove_job(self.name.as_str(), job).await
    }
}

/// Jenkins views APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingViewsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingViewsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingViewsService {
    /// `GET /view/<name>/api/json`
    pub fn get(
        &self,
        view: impl Into<ViewName>,
    ) -> Result<Option<Bound<View, crate::BlockingClient>>, Error> {
        self.client.get(&view_path(&view.into()))
    }

    /// Views of the root document keyed by lowercase name.
    pub fn list(&self) -> Result<HashMap<String, Bound<View, crate::BlockingClient>>, Error> {
        Ok(index_views(self.client.get::<MainView>("/")?))
    }

    /// `POST /view/<view>/addJobToView?name=<job>`
    pub fn add_job(&self, view: impl Into<ViewName>, job: impl Into<JobName>) -> Result<(), Error> {
        let path = membership_path(&view.into(), "addJobToView", &job.into());
        self.client.post_form::<&str, &str>(&path, &[])?;
        Ok(())
    }

    /// `POST /view/<view>/removeJobFromView?name=<job>`
    pub fn remove_job(
        &self,
        view: impl Into<ViewName>,
        job: impl Into<JobName>,
    ) -> Result<(), Error> {
        let path = membership_path(&view.into(), "removeJobFromView", &job.into());
        self.client.post_form::<&str, &str>(&path, &[])?;
        Ok(())
    }

    /// Names of the jobs listed in the view's `config.xml`.
    pub fn jobs_on_view(&self, view: impl Into<ViewName>) -> Result<Vec<String>, Error> {
        let config = self
            .client
            .get_xml_document::<ViewConfig>(&config_path(&view.into()))?;
        Ok(job_names(config))
    }
}

#[cfg(feature = "blocking")]
impl Bound<View, crate::BlockingClient> {
    pub fn jobs_on_view(&self) -> Result<Vec<String>, Error> {
        self.client().views().jobs_on_view(self.name.as_str())
    }

    pub fn add_job(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client().views().add_job(self.name.as_str(), job)
    }

    pub fn remove_job(&self, job: impl Into<JobName>) -> Result<(), Error> {
        self.client().views().remove_job(self.name.as_str(), job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_paths_put_job_in_query() {
        let path = membership_path(
            &ViewName::from("team view"),
            "addJobToView",
            &JobName::from("api build"),
        );
        assert_eq!(path, "/view/team%20view/addJobToView?name=api%20build");
    }

    #[test]
    fn missing_config_has_no_jobs() {
        assert!(job_names(None).is_empty());
    }
}
