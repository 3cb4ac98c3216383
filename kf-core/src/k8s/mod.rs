mod gvr;
mod resolver;
mod target;

pub use gvr::*;
pub use resolver::*;
pub use target::*;

use crate::errors::*;

err_impl! {KubernetesError,
    #[error("invalid resource format. Expected <type>/<name>, got {0}")]
    InvalidResourceFormat(String),

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
}

#[cfg(test)]
mod tests;
