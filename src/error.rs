// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Service watch failed: {0}")]
    WatchError(#[from] kube::runtime::watcher::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("Record store error: {0}")]
    StoreError(String),

    #[error("Namespace operation failed: {0}")]
    NamespaceError(String),

    #[error("No load balancer address assigned after {0:?}")]
    LoadBalancerTimeout(Duration),

    #[error("Service watch ended before a load balancer address was assigned")]
    WatchEnded,
}

pub type Result<T> = std::result::Result<T, BlogError>;
