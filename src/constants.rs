// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes label keys and selectors used by silver-spork
pub mod labels {
    /// Label carried by every blog resource in the shipped manifests
    pub const APP_SELECTOR: &str = "app=blog";
    /// Label added to every resource, holding the blog's domain
    pub const DOMAIN: &str = "domain";
}

/// Manifest files, relative to the manifest directory
pub mod manifests {
    pub const SECRETS: &[&str] = &["secrets/mysql.yaml"];
    pub const DEPLOYMENTS: &[&str] = &["deployments/mysql.yaml", "deployments/wp.yaml"];
    pub const SERVICES: &[&str] = &["services/wp.yaml", "services/wordpress-mysql.yaml"];
    pub const STORAGE: &[&str] = &["storage/pvc-mysql.yaml", "storage/pvc-wp.yaml"];
}

/// Configuration defaults
pub mod defaults {
    pub const KUBECONFIG: &str = "k8s/kubeconfig.yaml";
    pub const MANIFEST_DIR: &str = "k8s";
    pub const DB_PATH: &str = "db.json";
    /// Seconds to wait for the cloud provider to assign a load balancer address
    pub const LB_TIMEOUT_SECS: u64 = 600;
}
