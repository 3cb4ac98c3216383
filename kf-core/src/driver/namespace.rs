use std::io::Write;

use anyhow::Context;
use kube::api::PostParams;
use tracing::*;

use super::*;

// Namespaces don't get their finalizers cleared with a patch; the apiserver only honors changes to
// spec.finalizers through the "finalize" subresource, which wants the whole object.  We also
// refuse to touch a namespace that isn't already being deleted.
pub async fn force_delete_namespace(
    client: &kube::Client,
    name: &str,
    out: &mut impl Write,
) -> anyhow::Result<DeletionReport> {
    writeln!(out, "🔍 Processing namespace {name}...")?;
    let ns_api = kube::Api::<corev1::Namespace>::all(client.clone());

    let ns = ns_api.get(name).await.context("failed to get namespace")?;
    check_deletable(name, &ns)?;

    writeln!(out, "🔧 Removing finalizers via finalize endpoint...")?;
    let finalizers = StepOutcome::from_result(finalize(&ns_api, name, &ns).await);
    if finalizers.is_warning() {
        warn!("could not finalize namespace {name}, continuing with delete anyways");
    }
    write_warning(out, "finalize namespace", &finalizers)?;

    writeln!(out, "🗑️  Force deleting namespace...")?;
    let params = DeleteParams::background().grace_period(FORCE_DELETE_GRACE_PERIOD_SECONDS);
    let outcome = match ns_api.delete(name, &params).await {
        Ok(_) => {
            writeln!(out, "✅ Successfully initiated force deletion of namespace {name}")?;
            DeletionOutcome::Initiated
        },
        // Either the finalize call let the namespace controller finish the job before we got
        // here, or something else removed it in the meantime; either way it's gone.
        Err(kube::Error::Api(kube::core::ErrorResponse { code: 404, .. })) => {
            info!("namespace {name} was already removed");
            writeln!(out, "✅ Successfully removed namespace {name}")?;
            DeletionOutcome::AlreadyGone
        },
        Err(e) => return Err(anyhow!(e).context("failed to delete namespace")),
    };

    Ok(DeletionReport {
        target: format!("namespace/{name}"),
        finalizers,
        outcome,
    })
}

pub(super) fn check_deletable(name: &str, ns: &corev1::Namespace) -> EmptyResult {
    let phase = ns.status.as_ref().and_then(|s| s.phase.as_deref()).unwrap_or_default();
    if phase != NAMESPACE_TERMINATING_PHASE {
        return Err(DriverError::namespace_not_terminating(name, phase));
    }

    if ns.metadata.deletion_timestamp.is_none() {
        return Err(DriverError::namespace_not_deleting(name));
    }

    debug!("namespace {name} is terminating, proceeding");
    Ok(())
}

async fn finalize(
    ns_api: &kube::Api<corev1::Namespace>,
    name: &str,
    ns: &corev1::Namespace,
) -> anyhow::Result<corev1::Namespace> {
    let mut ns_finalize = ns.clone();
    if let Some(spec) = ns_finalize.spec.as_mut() {
        spec.finalizers = None;
    }

    let body = serde_json::to_vec(&ns_finalize)?;
    Ok(ns_api
        .replace_subresource(NAMESPACE_FINALIZE_SUBRESOURCE, name, &PostParams::default(), body)
        .await?)
}
