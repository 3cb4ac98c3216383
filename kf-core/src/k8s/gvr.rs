use std::fmt;
use std::ops::Deref;

use kube::core::{
    ApiResource,
    GroupVersion,
    GroupVersionResource,
};

use crate::errors::*;

// GVR is a "newtype" wrapper around kube's GroupVersionResource so that we can hang a Display impl
// and a couple of conversion helpers off of it.  It displays as "group/version/resource", or just
// "version/resource" for the core group.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct GVR(GroupVersionResource);

impl GVR {
    pub fn new(group: &str, version: &str, resource: &str) -> GVR {
        GVR(GroupVersionResource::gvr(group, version, resource))
    }

    // Discovery hands back "group/version" strings (or just "version" for the core group)
    pub fn from_group_version(group_version: &str, resource: &str) -> anyhow::Result<GVR> {
        let gv: GroupVersion = group_version.parse()?;
        if gv.version.is_empty() || gv.version.contains('/') {
            bail!("invalid format for group version: {group_version}");
        }
        Ok(GVR::new(&gv.group, &gv.version, resource))
    }

    pub fn api_version(&self) -> String {
        GroupVersion::gv(&self.0.group, &self.0.version).api_version()
    }

    // The kind is never part of a request path, so we leave it empty; only the plural matters
    // for building URLs against the dynamic API.
    pub fn api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.0.group.clone(),
            version: self.0.version.clone(),
            api_version: self.api_version(),
            kind: String::new(),
            plural: self.0.resource.clone(),
        }
    }
}

impl Deref for GVR {
    type Target = GroupVersionResource;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.api_version(), self.0.resource)
    }
}
