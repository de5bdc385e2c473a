// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Static blog manifests, loaded into typed Kubernetes objects.

use crate::constants::{labels, manifests};
use crate::error::{BlogError, Result};
use crate::types::Domain;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Secret, Service};
use kube::{Resource, ResourceExt};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Every resource that makes up one blog, in the order they are created
#[derive(Debug, Clone)]
pub struct BlogManifests {
    pub secrets: Vec<Secret>,
    pub deployments: Vec<Deployment>,
    pub services: Vec<Service>,
    pub claims: Vec<PersistentVolumeClaim>,
}

impl BlogManifests {
    /// Read and parse all manifests below `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let loaded = Self {
            secrets: load_all(dir, manifests::SECRETS)?,
            deployments: load_all(dir, manifests::DEPLOYMENTS)?,
            services: load_all(dir, manifests::SERVICES)?,
            claims: load_all(dir, manifests::STORAGE)?,
        };

        if let Some(unnamed) = loaded.services.iter().position(|s| s.metadata.name.is_none()) {
            return Err(BlogError::ManifestError(format!(
                "Service manifest {} has no metadata.name",
                dir.join(manifests::SERVICES[unnamed]).display()
            )));
        }

        Ok(loaded)
    }

    /// Copy of the manifests placed in the blog's namespace and labelled with its domain
    pub fn for_domain(&self, domain: &Domain) -> Self {
        Self {
            secrets: self.secrets.iter().map(|o| scoped(o, domain)).collect(),
            deployments: self.deployments.iter().map(|o| scoped(o, domain)).collect(),
            services: self.services.iter().map(|o| scoped(o, domain)).collect(),
            claims: self.claims.iter().map(|o| scoped(o, domain)).collect(),
        }
    }

    /// Names of the blog's services, used for teardown
    pub fn service_names(&self) -> Vec<String> {
        self.services.iter().map(|s| s.name_any()).collect()
    }
}

fn load_all<K: DeserializeOwned>(dir: &Path, files: &[&str]) -> Result<Vec<K>> {
    files.iter().map(|file| load_one(&dir.join(file))).collect()
}

fn load_one<K: DeserializeOwned>(path: &Path) -> Result<K> {
    debug!("Loading manifest {}", path.display());

    let raw = fs::read_to_string(path).map_err(|e| {
        BlogError::ManifestError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_yaml::from_str(&raw)
        .map_err(|e| BlogError::ManifestError(format!("Failed to parse {}: {}", path.display(), e)))
}

fn scoped<K: Resource + Clone>(object: &K, domain: &Domain) -> K {
    let mut object = object.clone();
    object.meta_mut().namespace = Some(domain.to_string());
    object
        .labels_mut()
        .insert(labels::DOMAIN.to_string(), domain.to_string());
    object
}
