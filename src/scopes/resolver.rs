//! The scope join: mappings → pipelines → auth policies → scopes.

use crate::model::{GatewayMapping, Pipeline, Policy};
use crate::scopes::{ScopeIndex, ScopeRoute};

/// Build the scope → route-list index from the three record collections.
///
/// For each mapping, in input order, every pipeline whose id equals the
/// mapping's `pipelineId` is visited (uniqueness is not assumed). For each
/// matched pipeline, every auth policy referenced by its `policyIds`
/// contributes its scopes, appending one `{verb, endpoint}` entry per scope
/// occurrence.
///
/// A mapping without a resolvable pipeline, a policy of a non-auth kind,
/// and a policy without scopes all contribute nothing.
pub fn build_scopes(
    mappings: &[GatewayMapping],
    pipelines: &[Pipeline],
    policies: &[Policy],
) -> ScopeIndex {
    let mut scopes = ScopeIndex::new();

    for mapping in mappings {
        let Some(pipeline_id) = &mapping.pipeline_id else {
            continue;
        };
        let matched_pipelines = pipelines
            .iter()
            .filter(|pipeline| pipeline.id.as_ref() == Some(pipeline_id));

        for pipeline in matched_pipelines {
            let matched_policies = policies.iter().filter(|policy| {
                policy.is_auth()
                    && policy
                        .id
                        .as_ref()
                        .is_some_and(|id| pipeline.policy_ids.contains(id))
            });

            for policy in matched_policies {
                let Some(names) = &policy.scopes else {
                    continue;
                };
                for scope in names {
                    scopes.entry(scope.clone()).or_default().push(ScopeRoute {
                        verb: mapping.verb.clone(),
                        endpoint: mapping.endpoint.clone(),
                    });
                }
            }
        }
    }

    scopes
}
