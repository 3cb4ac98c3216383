use anyhow::Context;
use tracing::*;

use super::{
    KubernetesError,
    GVR,
};
use crate::prelude::*;

// Well-known resource types that we can resolve without talking to the apiserver:
// (type token, group, version, plural)
pub const STATIC_RESOURCE_TABLE: [(&str, &str, &str, &str); 7] = [
    ("pod", "", "v1", "pods"),
    ("deployment", "apps", "v1", "deployments"),
    ("service", "", "v1", "services"),
    ("configmap", "", "v1", "configmaps"),
    ("secret", "", "v1", "secrets"),
    ("pvc", "", "v1", "persistentvolumeclaims"),
    ("pv", "", "v1", "persistentvolumes"),
];

pub fn static_gvr_for(type_token: &str) -> Option<GVR> {
    let token = type_token.to_lowercase();
    STATIC_RESOURCE_TABLE
        .iter()
        .find(|(t, ..)| *t == token)
        .map(|(_, group, version, plural)| GVR::new(group, version, plural))
}

// Scan the discovery results for a resource whose plural or singular name is exactly the type
// token (no case folding here).  The first match wins; if more than one group serves a resource
// with the same name, which one we get depends on the order the apiserver returned them in.
pub fn find_in_resource_lists(type_token: &str, lists: &[metav1::APIResourceList]) -> Option<GVR> {
    for list in lists {
        for res in &list.resources {
            if res.name != type_token && res.singular_name != type_token {
                continue;
            }

            match GVR::from_group_version(&list.group_version, &res.name) {
                Ok(gvr) => return Some(gvr),
                Err(e) => debug!("skipping {} in {}: {e}", res.name, list.group_version),
            }
        }
    }
    None
}

// Equivalent of "server preferred resources": one resource list per API group, using the
// group's preferred version.  The core group comes first, followed by the named groups in
// whatever order the apiserver lists them.
pub async fn preferred_resource_lists(client: &kube::Client) -> anyhow::Result<Vec<metav1::APIResourceList>> {
    let mut lists = vec![];

    let core_versions = client.list_core_api_versions().await?;
    if let Some(version) = core_versions.versions.first() {
        debug!("discovering core resources for {version}");
        lists.push(client.list_core_api_resources(version).await?);
    }

    for group in client.list_api_groups().await?.groups {
        let Some(preferred) = group.preferred_version.or_else(|| group.versions.first().cloned()) else {
            warn!("api group {} has no versions, skipping", group.name);
            continue;
        };
        debug!("discovering resources for {}", preferred.group_version);
        lists.push(client.list_api_group_resources(&preferred.group_version).await?);
    }

    Ok(lists)
}

pub async fn resolve(client: &kube::Client, type_token: &str) -> anyhow::Result<GVR> {
    if let Some(gvr) = static_gvr_for(type_token) {
        debug!("resolved {type_token} to {gvr} from the built-in table");
        return Ok(gvr);
    }

    info!("{type_token} is not a built-in resource type, querying discovery");
    let lists = preferred_resource_lists(client)
        .await
        .context("failed to get server resources")?;

    let gvr = find_in_resource_lists(type_token, &lists)
        .ok_or_else(|| KubernetesError::unknown_resource_type(type_token))?;
    debug!("resolved {type_token} to {gvr} via discovery");
    Ok(gvr)
}
