use crate::{Bound, Crumb, Error, MainView, MasterConfig, client::CRUMB_ISSUER_PATH};

const ROOT_PATH: &str = "/";
const MASTER_CONFIG_PATH: &str = "/config.xml";

/// Jenkins controller-level APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct SystemService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl SystemService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl SystemService {
    /// Whether the root document can be fetched. Never fails.
    pub async fn is_running(&self) -> bool {
        match self.client.get_text(ROOT_PATH).await {
            Ok(_) => true,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "server is not reachable");
                false
            }
        }
    }

    /// `GET /api/json`
    pub async fn main_view(&self) -> Result<Option<Bound<MainView, crate::Client>>, Error> {
        self.client.get(ROOT_PATH).await
    }

    /// `GET /config.xml`: the controller configuration.
    pub async fn master_config(
        &self,
    ) -> Result<Option<Bound<MasterConfig, crate::Client>>, Error> {
        self.client.get_xml(MASTER_CONFIG_PATH).await
    }

    /// `GET /crumbIssuer/api/json`. `None` when CSRF protection is off.
    pub async fn crumb(&self) -> Result<Option<Crumb>, Error> {
        Ok(self
            .client
            .get::<Crumb>(CRUMB_ISSUER_PATH)
            .await?
            .map(Bound::into_inner))
    }

    /// Run a Groovy script on the controller; see [`crate::Client::execute_script`].
    pub async fn execute_script(&self, script: &str) -> Result<Option<String>, Error> {
        self.client.execute_script(script).await
    }
}

/// Jenkins controller-level APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingSystemService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingSystemService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingSystemService {
    /// Whether the root document can be fetched. Never fails.
    pub fn is_running(&self) -> bool {
        match self.client.get_text(ROOT_PATH) {
            Ok(_) => true,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "server is not reachable");
                false
            }
        }
    }

    /// `GET /api/json`
    pub fn main_view(&self) -> Result<Option<Bound<MainView, crate::BlockingClient>>, Error> {
        self.client.get(ROOT_PATH)
    }

    /// `GET /config.xml`: the controller configuration.
    pub fn master_config(
        &self,
    ) -> Result<Option<Bound<MasterConfig, crate::BlockingClient>>, Error> {
        self.client.get_xml(MASTER_CONFIG_PATH)
    }

    /// `GET /crumbIssuer/api/json`. `None` when CSRF protection is off.
    pub fn crumb(&self) -> Result<Option<Crumb>, Error> {
        Ok(self
            .client
            .get::<Crumb>(CRUMB_ISSUER_PATH)?
            .map(Bound::into_inner))
    }

    /// Run a Groovy script on the controller; see [`crate::BlockingClient::execute_script`].
    pub fn execute_script(&self, script: &str) -> Result<Option<String>, Error> {
        self.client.execute_script(script)
    }
}
