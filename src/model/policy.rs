//! Policies: named rules attached to pipelines.
//!
//! Only policies of kind `auth` participate in scope resolution; every
//! other kind round-trips through the config file untouched.

use serde::{Deserialize, Serialize};

use crate::model::{unique_id_of, ConfigEntity, RecordId, RecordKind};

/// Discriminant value for policies that grant scopes.
pub const AUTH_POLICY: &str = "auth";

/// A named rule. The `kind` discriminant is an open string set; the
/// workspace interprets only `"auth"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Policy discriminant, serialized as `type`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Scope names granted by an auth policy, in declared order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Facet that loaded the record. Internal-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

impl Policy {
    /// Whether this policy participates in scope resolution.
    pub fn is_auth(&self) -> bool {
        self.kind == AUTH_POLICY
    }
}

impl ConfigEntity for Policy {
    const KIND: RecordKind = RecordKind::Policy;

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
