// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::labels;
use crate::error::{BlogError, Result};
use crate::types::Domain;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Ensure the blog's namespace exists in the cluster, create it if it doesn't
#[instrument(skip(client), fields(namespace = %domain))]
pub async fn ensure_namespace_exists(client: &Client, domain: &Domain) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(domain.as_str()).await {
        Ok(_) => {
            debug!("Namespace {} already exists", domain);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", domain);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(domain.to_string()),
                    labels: Some(BTreeMap::from([(
                        labels::DOMAIN.to_string(),
                        domain.to_string(),
                    )])),
                    ..Default::default()
                },
                ..Default::default()
            };
            namespaces.create(&PostParams::default(), &ns).await?;
            info!("Namespace {} created successfully", domain);
            Ok(())
        }
        Err(e) => Err(BlogError::NamespaceError(format!(
            "Failed to check/create namespace {}: {}",
            domain, e
        ))),
    }
}

/// Delete the blog's namespace; a namespace that is already gone is not an error
#[instrument(skip(client), fields(namespace = %domain))]
pub async fn delete_namespace(client: &Client, domain: &Domain) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.delete(domain.as_str(), &DeleteParams::default()).await {
        Ok(_) => {
            info!("Namespace {} removed", domain);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Namespace {} does not exist", domain);
            Ok(())
        }
        Err(e) => Err(BlogError::NamespaceError(format!(
            "Failed to delete namespace {}: {}",
            domain, e
        ))),
    }
}
