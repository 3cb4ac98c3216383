mod namespace;
mod resource;

use std::fmt;
use std::io::Write;

use kube::api::{
    DeleteParams,
    DynamicObject,
};
pub use namespace::force_delete_namespace;
pub use resource::force_delete_resource;
use serde_json::json;

use crate::errors::*;
use crate::k8s::resolve;
use crate::prelude::*;

err_impl! {DriverError,
    #[error("namespace {0} is not in Terminating state (current state: {1})")]
    NamespaceNotTerminating(String, String),

    #[error("namespace {0} is not being deleted (no deletion timestamp)")]
    NamespaceNotDeleting(String),
}

// Result of a best-effort step: failures here get downgraded to a warning and the driver keeps
// going, so they never show up as an Err.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    Completed,
    Warning(String),
}

impl StepOutcome {
    fn from_result<T, E: fmt::Display>(res: Result<T, E>) -> StepOutcome {
        match res {
            Ok(_) => StepOutcome::Completed,
            Err(e) => StepOutcome::Warning(e.to_string()),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, StepOutcome::Warning(_))
    }
}

// Result of the terminal (delete) step.  The apiserver accepting the delete doesn't mean the
// object is gone yet; we don't wait around to find out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeletionOutcome {
    Initiated,
    AlreadyGone,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeletionReport {
    pub target: String,
    pub finalizers: StepOutcome,
    pub outcome: DeletionOutcome,
}

impl DeletionReport {
    pub fn warnings(&self) -> Vec<&str> {
        match &self.finalizers {
            StepOutcome::Warning(msg) => vec![msg.as_str()],
            StepOutcome::Completed => vec![],
        }
    }
}

pub(crate) fn clear_finalizers_patch() -> serde_json::Value {
    json!({"metadata": {"finalizers": null}})
}

pub(crate) fn force_delete_params() -> DeleteParams {
    DeleteParams::default().grace_period(FORCE_DELETE_GRACE_PERIOD_SECONDS)
}

// An empty namespace means "don't put a namespace in the path", which is what you want for
// cluster-scoped resources; we don't try to guess a default.
pub(crate) fn dynamic_api(client: &kube::Client, gvr: &GVR, namespace: &str) -> kube::Api<DynamicObject> {
    let ar = gvr.api_resource();
    if namespace.is_empty() {
        kube::Api::all_with(client.clone(), &ar)
    } else {
        kube::Api::namespaced_with(client.clone(), namespace, &ar)
    }
}

pub(crate) fn write_warning(out: &mut impl Write, what: &str, outcome: &StepOutcome) -> EmptyResult {
    if let StepOutcome::Warning(msg) = outcome {
        writeln!(out, "⚠️  Warning: Failed to {what}: {msg}")?;
    }
    Ok(())
}

pub async fn force_delete(
    client: &kube::Client,
    target: &ResourceTarget,
    namespace: &str,
    out: &mut impl Write,
) -> anyhow::Result<DeletionReport> {
    if target.is_namespace() {
        return force_delete_namespace(client, &target.name, out).await;
    }

    let gvr = resolve(client, &target.type_token).await?;
    force_delete_resource(client, target, &gvr, namespace, out).await
}

#[cfg(test)]
mod tests;
