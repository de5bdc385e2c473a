// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::defaults;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file used to reach the cluster
    pub kubeconfig: PathBuf,
    /// Directory holding the blog manifests
    pub manifest_dir: PathBuf,
    /// JSON file tracking deployed blogs
    pub db_path: PathBuf,
    /// How long `deploy` waits for a load balancer address
    pub lb_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        let lb_timeout_secs = match lookup("SILVER_SPORK_LB_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("SILVER_SPORK_LB_TIMEOUT_SECS is not a number: {}", raw))?,
            None => defaults::LB_TIMEOUT_SECS,
        };

        Ok(Config {
            kubeconfig: path("SILVER_SPORK_KUBECONFIG", defaults::KUBECONFIG),
            manifest_dir: path("SILVER_SPORK_MANIFEST_DIR", defaults::MANIFEST_DIR),
            db_path: path("SILVER_SPORK_DB", defaults::DB_PATH),
            lb_timeout: Duration::from_secs(lb_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.kubeconfig, PathBuf::from("k8s/kubeconfig.yaml"));
        assert_eq!(config.manifest_dir, PathBuf::from("k8s"));
        assert_eq!(config.db_path, PathBuf::from("db.json"));
        assert_eq!(config.lb_timeout, Duration::from_secs(600));
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("SILVER_SPORK_KUBECONFIG", "/etc/kube/config"),
            ("SILVER_SPORK_MANIFEST_DIR", "/srv/manifests"),
            ("SILVER_SPORK_DB", "/var/lib/blogs.json"),
            ("SILVER_SPORK_LB_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.kubeconfig, PathBuf::from("/etc/kube/config"));
        assert_eq!(config.manifest_dir, PathBuf::from("/srv/manifests"));
        assert_eq!(config.db_path, PathBuf::from("/var/lib/blogs.json"));
        assert_eq!(config.lb_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("SILVER_SPORK_LB_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }
}
