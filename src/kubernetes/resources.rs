// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic create/delete helpers for namespaced blog resources

use crate::error::Result;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// Outcome of a create call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    New,
    AlreadyExisted,
}

/// Create an object in a namespace. An object that already exists is left untouched.
#[instrument(skip(client, object), fields(kind = %K::kind(&()), name = %object.name_any()))]
pub async fn create_namespaced<K>(client: &Client, namespace: &str, object: &K) -> Result<Created>
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + Debug
        + Serialize
        + DeserializeOwned,
{
    let api: Api<K> = Api::namespaced(client.clone(), namespace);
    let name = object.name_any();

    match api.create(&PostParams::default(), object).await {
        Ok(_) => {
            info!("{} {}/{} created", K::kind(&()), namespace, name);
            Ok(Created::New)
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            warn!(
                "{} {}/{} already exists, leaving it as is",
                K::kind(&()),
                namespace,
                name
            );
            Ok(Created::AlreadyExisted)
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete every object of kind `K` in a namespace matching a label selector
#[instrument(skip(client), fields(kind = %K::kind(&())))]
pub async fn delete_collection_labelled<K>(
    client: &Client,
    namespace: &str,
    selector: &str,
) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + Debug + DeserializeOwned,
{
    let api: Api<K> = Api::namespaced(client.clone(), namespace);

    api.delete_collection(&DeleteParams::default(), &ListParams::default().labels(selector))
        .await?;

    info!(
        "{} in namespace '{}' with labels '{}' deleted",
        K::kind(&()),
        namespace,
        selector
    );
    Ok(())
}

/// Delete a single named object; one that is already gone is not an error
#[instrument(skip(client), fields(kind = %K::kind(&())))]
pub async fn delete_namespaced<K>(client: &Client, namespace: &str, name: &str) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + Debug + DeserializeOwned,
{
    let api: Api<K> = Api::namespaced(client.clone(), namespace);

    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {
            info!(
                "{} in namespace '{}' with name '{}' deleted",
                K::kind(&()),
                namespace,
                name
            );
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("{} {}/{} does not exist", K::kind(&()), namespace, name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
