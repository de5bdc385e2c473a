// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deploys and removes a WordPress blog and keeps the record store in step.

use crate::constants::labels;
use crate::error::Result;
use crate::kubernetes::{
    create_namespaced, delete_collection_labelled, delete_namespace, delete_namespaced,
    ensure_namespace_exists, wait_for_load_balancer, Created,
};
use crate::manifests::BlogManifests;
use crate::store::{BlogRecord, BlogStore};
use crate::types::Domain;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Secret, Service};
use k8s_openapi::NamespaceResourceScope;
use kube::{Client, Resource};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub struct Provisioner {
    client: Client,
    manifests: BlogManifests,
    store: BlogStore,
    lb_timeout: Duration,
}

impl Provisioner {
    pub fn new(
        client: Client,
        manifests: BlogManifests,
        store: BlogStore,
        lb_timeout: Duration,
    ) -> Self {
        Self {
            client,
            manifests,
            store,
            lb_timeout,
        }
    }

    /// Create every blog resource, then wait for the load balancer address.
    /// Returns the address the blog is reachable on.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn deploy(&self, domain: &Domain) -> Result<String> {
        let namespace = domain.as_str();
        let manifests = self.manifests.for_domain(domain);

        ensure_namespace_exists(&self.client, domain).await?;

        let mut existing = self.create_all(namespace, &manifests.secrets).await?;
        info!("Secrets for {} configured", domain);

        existing += self.create_all(namespace, &manifests.deployments).await?;
        info!("Deployments for {} done", domain);

        existing += self.create_all(namespace, &manifests.services).await?;
        info!("Services for {} configured", domain);

        existing += self.create_all(namespace, &manifests.claims).await?;
        info!("Storage for {} configured", domain);

        if existing > 0 {
            warn!(
                "{} resources for {} already existed and were left as is",
                existing, domain
            );
        }

        self.store.upsert(BlogRecord::pending(namespace))?;

        let ip = wait_for_load_balancer(&self.client, namespace, self.lb_timeout).await?;
        self.store.mark_deployed(namespace, &ip)?;

        info!(ip = %ip, "Successfully deployed blog {}", domain);
        Ok(ip)
    }

    /// Create each object in turn, returning how many already existed
    async fn create_all<K>(&self, namespace: &str, objects: &[K]) -> Result<usize>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let mut existing = 0;
        for object in objects {
            if create_namespaced(&self.client, namespace, object).await? == Created::AlreadyExisted {
                existing += 1;
            }
        }
        Ok(existing)
    }

    /// Remove every blog resource and the namespace, then forget the blog.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn destroy(&self, domain: &Domain) -> Result<()> {
        let namespace = domain.as_str();

        delete_collection_labelled::<Deployment>(&self.client, namespace, labels::APP_SELECTOR)
            .await?;
        delete_collection_labelled::<Secret>(&self.client, namespace, labels::APP_SELECTOR)
            .await?;

        for name in self.manifests.service_names() {
            delete_namespaced::<Service>(&self.client, namespace, &name).await?;
        }

        delete_collection_labelled::<PersistentVolumeClaim>(
            &self.client,
            namespace,
            labels::APP_SELECTOR,
        )
        .await?;
        delete_namespace(&self.client, domain).await?;

        if !self.store.remove(namespace)? {
            warn!("No record for blog {} in {}", domain, self.store.path().display());
        }

        info!("Successfully removed blog {}", domain);
        Ok(())
    }
}
