use crate::{Bound, Computer, ComputerConfig, ComputerName, ComputerSet, Error, Node};
use std::collections::HashMap;

const COMPUTER_SET_PATH: &str = "computer/";
const CREATE_NODE_PATH: &str = "/computer/doCreateItem";

fn computer_path(name: &ComputerName) -> String {
    format!("computer/{}", name.encoded())
}

fn config_path(name: &ComputerName) -> String {
    format!("/computer/{}/config.xml", name.encoded())
}

fn delete_path(name: &ComputerName) -> String {
    format!("/computer/{}/doDelete", name.encoded())
}

fn index_computers<C: Clone>(
    set: Option<Bound<ComputerSet, C>>,
) -> HashMap<String, Bound<Computer, C>> {
    let Some(set) = set else {
        return HashMap::new();
    };
    let (set, client) = set.into_parts();
    set.computers
        .into_iter()
        .map(|computer| {
            (
                computer.display_name.to_lowercase(),
                Bound::new(computer, client.clone()),
            )
        })
        .collect()
}

/// A failing status means "no such computer"; only transport-level failures propagate.
fn absent_on_http_error<T>(result: Result<Option<T>, Error>) -> Result<Option<T>, Error> {
    match result {
        Err(err) if err.http().is_some() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %err, "computer lookup failed; treating as absent");
            Ok(None)
        }
        other => other,
    }
}

/// `name`, `type` and the node as JSON, the fields `doCreateItem` expects.
fn create_node_form(node: &Node, json: String) -> [(&'static str, String); 3] {
    [
        ("name", node.name.clone()),
        ("type", node.kind.clone()),
        ("json", json),
    ]
}

/// Jenkins computers (agents) APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct ComputersService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl ComputersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl ComputersService {
    /// `GET /computer/api/json`: every computer keyed by lowercase display name.
    pub async fn list(&self) -> Result<HashMap<String, Bound<Computer, crate::Client>>, Error> {
        Ok(index_computers(
            self.client.get::<ComputerSet>(COMPUTER_SET_PATH).await?,
        ))
    }

    /// `GET /computer/<name>/api/json`. Any failing HTTP status yields `None`.
    pub async fn get(
        &self,
        name: impl Into<ComputerName>,
    ) -> Result<Option<Bound<Computer, crate::Client>>, Error> {
        absent_on_http_error(self.client.get(&computer_path(&name.into())).await)
    }

    /// `GET /computer/<name>/config.xml`
    pub async fn config(
        &self,
        name: impl Into<ComputerName>,
    ) -> Result<Option<Bound<ComputerConfig, crate::Client>>, Error> {
        self.client.get_xml(&config_path(&name.into())).await
    }

    /// `POST /computer/doCreateItem` with the node as a form-embedded JSON document.
    pub async fn create_node(&self, node: &Node) -> Result<(), Error> {
        let json = self.client.encode_json(node)?;
        self.client
            .post_form(CREATE_NODE_PATH, &create_node_form(node, json))
            .await?;
        Ok(())
    }

    /// `POST /computer/<name>/doDelete`
    pub async fn delete_node(&self, name: impl Into<ComputerName>) -> Result<(), Error> {
        self.client
            .post_form::<&str, &str>(&delete_path(&name.into()), &[])
            .await?;
        Ok(())
    }
}

#[cfg(feature = "async")]
impl Bound<Computer, crate::Client> {
    /// Re-fetch this computer.
    pub async fn details(&self) -> Result<Option<Bound<Computer, crate::Client>>, Error> {
        self.client()
            .computers()
            .get(self.display_name.as_str())
            .await
    }

    pub async fn delete(&self) -> Result<(), Error> {
        self.client()
            .computers()
            .delete_node(self.display_name.as_str())
            .await
    }
}

/// Jenkins computers (agents) APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingComputersService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingComputersService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingComputersService {
    /// `GET /computer/api/json`: every computer keyed by lowercase display name.
    pub fn list(&self) -> Result<HashMap<String, Bound<Computer, crate::BlockingClient>>, Error> {
        Ok(index_computers(
            self.client.get::<ComputerSet>(COMPUTER_SET_PATH)?,
        ))
    }

    /// `GET /computer/<name>/api/json`. Any failing HTTP status yields `None`.
    pub fn get(
        &self,
        name: impl Into<ComputerName>,
    ) -> Result<Option<Bound<Computer, crate::BlockingClient>>, Error> {
        absent_on_http_error(self.client.get(&computer_path(&name.into())))
    }

    /// `GET /computer/<name>/config.xml`
    pub fn config(
        &self,
        name: impl Into<ComputerName>,
    ) -> Result<Option<Bound<ComputerConfig, crate::BlockingClient>>, Error> {
        self.client.get_xml(&config_path(&name.into()))
    }

    /// `POST /computer/doCreateItem` with the node as a form-embedded JSON document.
    pub fn create_node(&self, node: &Node) -> Result<(), Error> {
        let json = self.client.encode_json(node)?;
        self.client
            .post_form(CREATE_NODE_PATH, &create_node_form(node, json))?;
        Ok(())
    }

    /// `POST /computer/<name>/doDelete`
    pub fn delete_node(&self, name: impl Into<ComputerName>) -> Result<(), Error> {
        self.client
            .post_form::<&str, &str>(&delete_path(&name.into()), &[])?;
        Ok(())
    }
}

#[cfg(feature = "blocking")]
impl Bound<Computer, crate::BlockingClient> {
    /// Re-fetch this computer.
    pub fn details(&self) -> Result<Option<Bound<Computer, crate::BlockingClient>>, Error> {
        self.client().computers().get(self.display_name.as_str())
    }

    pub fn delete(&self) -> Result<(), Error> {
        self.client()
            .computers()
            .delete_node(self.display_name.as_str())
    }
}
