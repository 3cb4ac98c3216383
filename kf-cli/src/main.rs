#![cfg_attr(coverage, feature(coverage_attribute))]
mod completions;
mod finalize;
mod kube_options;

use std::process;

use clap::{
    value_parser,
    CommandFactory,
    Parser,
};
use clap_complete::Shell;
use kf_core::errors::*;
use kf_core::logging;

use crate::kube_options::KubeOptions;

const EXAMPLES: &str = "Examples:
  # Force delete a pod
  kubectl finalize pod/stuck-pod

  # Force delete a namespace
  kubectl finalize namespace/stuck-ns

  # Force delete a resource in specific namespace
  kubectl finalize deployment/stuck-deploy -n my-namespace";

#[derive(Parser)]
#[command(
    name = completions::BIN_NAME,
    about = "Force delete Kubernetes resources stuck in Terminating state",
    long_about = "A kubectl plugin to force delete Kubernetes resources that are stuck in Terminating state.
It removes finalizers and performs a force deletion of the resource.",
    after_help = EXAMPLES,
    version
)]
struct FinalizeCommandRoot {
    #[arg(
        value_name = "RESOURCE",
        required_unless_present = "completions",
        long_help = "resource to delete, in the form <type>/<name>"
    )]
    resource: Option<String>,

    #[command(flatten)]
    kube: KubeOptions,

    #[arg(
        long,
        value_name = "SHELL",
        value_parser = value_parser!(Shell),
        long_help = "print shell completions for the given shell to stdout and exit"
    )]
    completions: Option<Shell>,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[tokio::main]
async fn main() -> EmptyResult {
    // Usage errors exit with 1 like every other failure; clap would use 2
    let args = FinalizeCommandRoot::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });
    logging::setup_for_cli(&args.verbosity);

    if let Some(shell) = args.completions {
        return completions::cmd(shell, FinalizeCommandRoot::command());
    }

    match &args.resource {
        Some(resource) => finalize::cmd(resource, &args.kube).await,
        None => bail!("resource argument is required"),
    }
}

#[cfg(test)]
mod tests;
