//! Pipelines: ordered policy chains that mappings bind to.

use serde::{Deserialize, Serialize};

use crate::model::{unique_id_of, ConfigEntity, RecordId, RecordKind};

/// An ordered chain of policies applied to requests matching a mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Policy references, in execution order.
    #[serde(default)]
    pub policy_ids: Vec<RecordId>,

    /// Facet that loaded the record. Internal-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

impl ConfigEntity for Pipeline {
    const KIND: RecordKind = RecordKind::Pipeline;

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
