// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespaces, resources and load balancer watching.

pub mod client;
pub mod load_balancer;
pub mod namespaces;
pub mod resources;

pub use client::create_client;
pub use load_balancer::{load_balancer_address, wait_for_load_balancer};
pub use namespaces::{delete_namespace, ensure_namespace_exists};
pub use resources::{create_namespaced, delete_collection_labelled, delete_namespaced, Created};
