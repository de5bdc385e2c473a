// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Waiting for the cloud provider to assign a load balancer address

use crate::constants::labels;
use crate::error::{BlogError, Result};
use futures::TryStreamExt;
use k8s_openapi::api::core::v1::Service;
use kube::{
    runtime::{watcher, WatchStreamExt},
    Api, Client, ResourceExt,
};
use std::pin::pin;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// External address of a `LoadBalancer` service, if one has been assigned.
/// Providers publish either an IP or a hostname; the IP is preferred.
pub fn load_balancer_address(service: &Service) -> Option<String> {
    let is_load_balancer = service
        .spec
        .as_ref()
        .and_then(|s| s.type_.as_deref())
        .is_some_and(|t| t == "LoadBalancer");
    if !is_load_balancer {
        return None;
    }

    service
        .status
        .as_ref()?
        .load_balancer
        .as_ref()?
        .ingress
        .as_ref()?
        .first()
        .and_then(|ingress| ingress.ip.clone().or_else(|| ingress.hostname.clone()))
}

/// Watch the blog's services until one of them gets a load balancer address.
#[instrument(skip(client))]
pub async fn wait_for_load_balancer(
    client: &Client,
    namespace: &str,
    wait_timeout: Duration,
) -> Result<String> {
    info!("Waiting for Load Balancer's IP ...");

    timeout(wait_timeout, watch_services(client, namespace))
        .await
        .map_err(|_| BlogError::LoadBalancerTimeout(wait_timeout))?
}

async fn watch_services(client: &Client, namespace: &str) -> Result<String> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);
    let config = watcher::Config::default().labels(labels::APP_SELECTOR);
    let mut stream = pin!(watcher(services, config).applied_objects());

    while let Some(service) = stream.try_next().await? {
        debug!("Observed service {}", service.name_any());
        if let Some(address) = load_balancer_address(&service) {
            info!(
                "Service {} got load balancer address {}",
                service.name_any(),
                address
            );
            return Ok(address);
        }
        info!("Still waiting for Load Balancer to get an external IP ...");
    }

    Err(BlogError::WatchEnded)
}
