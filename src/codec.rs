//! Body encoding/decoding configuration shared by every request a client makes.

use crate::Error;
use http::HeaderValue;
use serde::{Serialize, de::DeserializeOwned};
use std::{error::Error as StdError, fmt};

/// Wire format of a request or response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        })
    }
}

/// Serializer settings handed to the client at construction.
///
/// Decoding always ignores fields the models do not know about, so newer
/// servers that add properties keep working.
#[derive(Debug, Clone)]
pub struct Codec {
    pretty_json: bool,
    xml_content_types: Vec<String>,
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            pretty_json: false,
            xml_content_types: vec!["application/xml".to_owned()],
        }
    }
}

impl Codec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print JSON request bodies and form-embedded JSON.
    #[must_use]
    pub fn pretty_json(mut self, yes: bool) -> Self {
        self.pretty_json = yes;
        self
    }

    /// Treat responses whose `Content-Type` contains `marker` as XML.
    ///
    /// `application/xml` is always recognised.
    #[must_use]
    pub fn xml_content_type(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into().to_ascii_lowercase();
        if !self.xml_content_types.contains(&marker) {
            self.xml_content_types.push(marker);
        }
        self
    }

    /// Pick the decoder for a response from its declared content type.
    ///
    /// Anything that is not recognised as XML (including a missing header) is JSON.
    #[must_use]
    pub fn format_for(&self, content_type: Option<&HeaderValue>) -> Format {
        let Some(value) = content_type.and_then(|v| v.to_str().ok()) else {
            return Format::Json;
        };
        let value = value.to_ascii_lowercase();
        if self
            .xml_content_types
            .iter()
            .any(|marker| value.contains(marker.as_str()))
        {
            Format::Xml
        } else {
            Format::Json
        }
    }

    pub(crate) fn decode<T: DeserializeOwned>(
        &self,
        format: Format,
        body: &[u8],
    ) -> Result<T, Box<dyn StdError + Send + Sync>> {
        match format {
            Format::Json => Ok(serde_json::from_slice(body)?),
            Format::Xml => {
                let text = std::str::from_utf8(body)?;
                Ok(self.decode_xml_str(text)?)
            }
        }
    }

    pub(crate) fn decode_xml_str<T: DeserializeOwned>(
        &self,
        text: &str,
    ) -> Result<T, quick_xml::DeError> {
        quick_xml::de::from_str(text)
    }

    pub(crate) fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        let encoded = if self.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|err| Error::Encode {
            format: Format::Json,
            source: Box::new(err),
        })
    }
}
