use std::fmt;

use super::KubernetesError;
use crate::prelude::*;

// A ResourceTarget is the parsed form of the single positional "<type>/<name>" argument.  The type
// token is kept exactly as the user typed it; the resolver decides how to interpret it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceTarget {
    pub type_token: String,
    pub name: String,
}

impl ResourceTarget {
    pub fn parse(arg: &str) -> anyhow::Result<ResourceTarget> {
        match arg.split('/').collect::<Vec<_>>().as_slice() {
            [type_token, name] if !type_token.is_empty() && !name.is_empty() => Ok(ResourceTarget {
                type_token: (*type_token).into(),
                name: (*name).into(),
            }),
            _ => Err(KubernetesError::invalid_resource_format(arg)),
        }
    }

    pub fn is_namespace(&self) -> bool {
        NAMESPACE_TYPE_TOKENS.contains(&self.type_token.as_str())
    }
}

impl fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.type_token, self.name)
    }
}
