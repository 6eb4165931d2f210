//! Gateway mappings: a route binding (HTTP verb + endpoint) to a pipeline.

use serde::{Deserialize, Serialize};

use crate::model::{unique_id_of, ConfigEntity, RecordId, RecordKind};

/// A route declaration binding an HTTP verb and endpoint to a pipeline.
///
/// The mapping references exactly one pipeline by id. A reference to a
/// pipeline that does not exist is not an error; such a mapping simply
/// grants no scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayMapping {
    /// Optional unique key; takes precedence over `id` as the external
    /// identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// HTTP method, e.g. `"GET"`.
    #[serde(default)]
    pub verb: String,

    /// Route path, e.g. `"/catalog"`.
    #[serde(default)]
    pub endpoint: String,

    /// The pipeline this route is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<RecordId>,

    /// Facet that loaded the record. Internal-only; never serialized into
    /// the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

impl ConfigEntity for GatewayMapping {
    const KIND: RecordKind = RecordKind::Mapping;

    fn unique_id(&self) -> String {
        unique_id_of(&self.name, &self.id)
    }

    fn into_config(mut self) -> Self {
        self.facet = None;
        self
    }

    fn with_facet(mut self, facet: &str) -> Self {
        self.facet = Some(facet.to_string());
        self
    }
}
