use std::path::PathBuf;

use anyhow::Context;
use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

// The usual kubectl connection flags.  These get passed around explicitly; nothing about the
// connection lives in a global.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct KubeOptions {
    #[arg(
        short,
        long,
        default_value = "",
        long_help = "namespace of the resource; leave unset for cluster-scoped resources"
    )]
    pub namespace: String,

    #[arg(long, long_help = "path to the kubeconfig file to use")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, long_help = "name of the kubeconfig context to use")]
    pub context: Option<String>,

    #[arg(long, long_help = "name of the kubeconfig cluster to use")]
    pub cluster: Option<String>,

    #[arg(long, long_help = "name of the kubeconfig user to use")]
    pub user: Option<String>,

    #[arg(short, long, long_help = "address and port of the Kubernetes API server")]
    pub server: Option<String>,

    #[arg(long, long_help = "don't verify the server's certificate; this makes your connection insecure")]
    pub insecure_skip_tls_verify: bool,
}

impl KubeOptions {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }

    fn selects_from_kubeconfig(&self) -> bool {
        self.context.is_some() || self.cluster.is_some() || self.user.is_some()
    }

    pub async fn to_config(&self) -> anyhow::Result<kube::Config> {
        let mut config = if let Some(path) = &self.kubeconfig {
            let kubeconfig = Kubeconfig::read_from(path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &self.kubeconfig_options()).await?
        } else if self.selects_from_kubeconfig() {
            kube::Config::from_kubeconfig(&self.kubeconfig_options()).await?
        } else {
            match (kube::Config::infer().await, &self.server) {
                (Ok(config), _) => config,
                // With an explicit server we can still get somewhere without a kubeconfig
                (Err(e), Some(server)) => {
                    debug!("could not infer config ({e}), connecting to {server} without credentials");
                    kube::Config::new(server.parse()?)
                },
                (Err(e), None) => return Err(e.into()),
            }
        };

        if let Some(server) = &self.server {
            config.cluster_url = server.parse().with_context(|| format!("invalid server address: {server}"))?;
        }
        if self.insecure_skip_tls_verify {
            warn!("skipping TLS verification for {}", config.cluster_url);
            config.accept_invalid_certs = true;
        }

        debug!("connecting to {}", config.cluster_url);
        Ok(config)
    }

    pub async fn client(&self) -> anyhow::Result<kube::Client> {
        let config = self.to_config().await.context("failed to get REST config")?;
        kube::Client::try_from(config).context("failed to create kubernetes client")
    }
}
