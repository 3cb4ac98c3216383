use std::io::{
    self,
    Write,
};

use kf_core::driver::force_delete;
use kf_core::prelude::*;
use tracing::*;

use crate::kube_options::KubeOptions;

pub async fn cmd(resource: &str, opts: &KubeOptions) -> EmptyResult {
    // Bad input shouldn't need a working kubeconfig to get reported
    let target = ResourceTarget::parse(resource)?;
    let client = opts.client().await?;

    run(&client, &target, &opts.namespace, &mut io::stdout().lock()).await
}

pub(crate) async fn run(
    client: &kube::Client,
    target: &ResourceTarget,
    namespace: &str,
    out: &mut impl Write,
) -> EmptyResult {
    let report = force_delete(client, target, namespace, out).await?;
    out.flush()?;

    info!("{} finished with {:?} ({} warnings)", report.target, report.outcome, report.warnings().len());
    Ok(())
}
