use std::io::Write;

use anyhow::Context;
use kube::api::{
    Patch,
    PatchParams,
};
use tracing::*;

use super::*;

pub async fn force_delete_resource(
    client: &kube::Client,
    target: &ResourceTarget,
    gvr: &GVR,
    namespace: &str,
    out: &mut impl Write,
) -> anyhow::Result<DeletionReport> {
    writeln!(out, "🔍 Processing {target} in namespace {namespace}...")?;
    let api = dynamic_api(client, gvr, namespace);

    // We don't check whether there's anything to remove first; patching an object that has no
    // finalizers is a no-op.
    writeln!(out, "🔧 Removing finalizers...")?;
    debug!("clearing finalizers on {gvr} {}", target.name);
    let finalizers = StepOutcome::from_result(
        api.patch(&target.name, &PatchParams::default(), &Patch::Merge(clear_finalizers_patch()))
            .await,
    );
    if finalizers.is_warning() {
        warn!("could not clear finalizers on {target}, continuing with delete anyways");
    }
    write_warning(out, "remove finalizers", &finalizers)?;

    writeln!(out, "🗑️  Force deleting resource...")?;
    debug!("deleting {gvr} {} with zero grace period", target.name);
    api.delete(&target.name, &force_delete_params())
        .await
        .context("failed to delete resource")?;

    writeln!(out, "✅ Successfully initiated force deletion of {target}")?;
    Ok(DeletionReport {
        target: target.to_string(),
        finalizers,
        outcome: DeletionOutcome::Initiated,
    })
}
