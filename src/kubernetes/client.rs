// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::error::{BlogError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client,
};
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Create a Kubernetes client from the given kubeconfig file. When the file does
/// not exist the configuration is inferred from the environment instead.
#[instrument]
pub async fn create_client(kubeconfig_path: &Path) -> Result<Client> {
    if !kubeconfig_path.exists() {
        warn!(
            "Kubeconfig {} not found, inferring configuration from the environment",
            kubeconfig_path.display()
        );
        return Client::try_default()
            .await
            .map_err(|e| BlogError::KubeconfigError(format!("Failed to infer config: {}", e)));
    }

    info!("Loading kubeconfig from {}", kubeconfig_path.display());
    let kubeconfig = fs::read_to_string(kubeconfig_path).map_err(|e| {
        BlogError::KubeconfigError(format!(
            "Failed to read {}: {}",
            kubeconfig_path.display(),
            e
        ))
    })?;

    create_client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| BlogError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| BlogError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| BlogError::KubeconfigError(format!("Failed to create client: {}", e)))
}
