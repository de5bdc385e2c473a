// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface: argument parsing and command dispatch.

use crate::config::Config;
use crate::kubernetes::create_client;
use crate::manifests::BlogManifests;
use crate::provisioner::Provisioner;
use crate::store::{BlogRecord, BlogStore};
use crate::types::Domain;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const DOMAIN_RULES: &str = "It must consist of lower case alphanumeric characters or '-', \
and must start and end with an alphanumeric character (e.g. 'my-name', or '123-abc')";

#[derive(Debug, Parser)]
#[command(name = "silver-spork", version, about = "Deploy WordPress blogs on a Kubernetes cluster")]
pub struct Cli {
    /// Path to the kube-config yaml file
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Directory holding the blog manifests
    #[arg(long, global = true)]
    pub manifests: Option<PathBuf>,

    /// JSON file tracking deployed blogs
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deploy a WP blog on a Kubernetes cluster
    Deploy {
        /// Blog domain, also used as the namespace name
        #[arg(long)]
        domain: Option<Domain>,

        /// Seconds to wait for the load balancer address
        #[arg(long)]
        wait_timeout: Option<u64>,
    },

    /// Remove a WP blog from the Kubernetes cluster
    Destroy {
        /// Blog domain, also used as the namespace name
        #[arg(long)]
        domain: Option<Domain>,
    },

    /// List all blogs deployed on the Kubernetes cluster
    #[command(alias = "list")]
    ListBlogs,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(path) = &self.kubeconfig {
            config.kubeconfig = path.clone();
        }
        if let Some(dir) = &self.manifests {
            config.manifest_dir = dir.clone();
        }
        if let Some(path) = &self.db {
            config.db_path = path.clone();
        }
        if let Command::Deploy {
            wait_timeout: Some(secs),
            ..
        } = self.command
        {
            config.lb_timeout = Duration::from_secs(secs);
        }
        config
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.apply_overrides(Config::from_env()?);

    match cli.command {
        Command::Deploy { domain, .. } => {
            let domain = domain_or_prompt(domain, "deploy")?;
            info!("Deploying {} WP blog on Kubernetes cluster ...", domain);
            let ip = provisioner(&config).await?.deploy(&domain).await?;
            println!("Blog {} is reachable at {}", domain, ip);
        }
        Command::Destroy { domain } => {
            let domain = domain_or_prompt(domain, "remove")?;
            info!("Removing {} WP blog from Kubernetes cluster ...", domain);
            provisioner(&config).await?.destroy(&domain).await?;
        }
        Command::ListBlogs => {
            list_blogs(&BlogStore::new(&config.db_path), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

async fn provisioner(config: &Config) -> Result<Provisioner> {
    // Manifests are parsed before any cluster call so a broken file fails fast
    let manifests = BlogManifests::load(&config.manifest_dir)?;
    let client = create_client(&config.kubeconfig)
        .await
        .context("Kubernetes configuration not set, cannot reach the cluster")?;

    Ok(Provisioner::new(
        client,
        manifests,
        BlogStore::new(&config.db_path),
        config.lb_timeout,
    ))
}

fn domain_or_prompt(domain: Option<Domain>, action: &str) -> Result<Domain> {
    match domain {
        Some(domain) => Ok(domain),
        None => prompt_domain(action, &mut io::stdin().lock(), &mut io::stdout()),
    }
}

fn prompt_domain(action: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<Domain> {
    write!(
        output,
        "Enter the domain of the blog you want to {}. {}: ",
        action, DOMAIN_RULES
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read domain")?;
    Ok(line.trim().parse()?)
}

fn list_blogs(store: &BlogStore, output: &mut impl Write) -> Result<()> {
    let blogs = store.all()?;
    writeln!(
        output,
        "We have the following blogs deployed on the kubernetes cluster:"
    )?;
    for blog in &blogs {
        writeln!(output, "{}", format_record(blog))?;
    }
    Ok(())
}

pub fn format_record(record: &BlogRecord) -> String {
    format!(
        "Domain {}, ip: {}, fully deployed: {}",
        record.domain,
        record.ip.as_deref().unwrap_or("None"),
        record.deployed
    )
}
