use crate::{Bound, Error, LabelName, LabelWithDetails};

fn label_path(label: &LabelName) -> String {
    format!("/label/{}", label.encoded())
}

/// Jenkins labels APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct LabelsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl LabelsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /label/<name>/api/json`
    pub async fn get(
        &self,
        label: impl Into<LabelName>,
    ) -> Result<Option<Bound<LabelWithDetails, crate::Client>>, Error> {
        self.client.get(&label_path(&label.into())).await
    }
}

/// Jenkins labels APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingLabelsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingLabelsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /label/<name>/api/json`
    pub fn get(
        &self,
        label: impl Into<LabelName>,
    ) -> Result<Option<Bound<LabelWithDetails, crate::BlockingClient>>, Error> {
        self.client.get(&label_path(&label.into()))
    }
}
