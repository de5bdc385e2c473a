// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local record store tracking deployed blogs in a JSON file.

use crate::error::{BlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BlogRecord {
    pub domain: String,
    pub ip: Option<String>,
    pub deployed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<DateTime<Utc>>,
}

impl BlogRecord {
    /// A record for a blog whose resources exist but has no address yet
    pub fn pending(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ip: None,
            deployed: false,
            deployed_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct StoreFile {
    #[serde(default)]
    blogs: Vec<BlogRecord>,
}

/// File-backed blog records. Every operation reads and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct BlogStore {
    path: PathBuf,
}

impl BlogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn all(&self) -> Result<Vec<BlogRecord>> {
        Ok(self.read()?.blogs)
    }

    pub fn get(&self, domain: &str) -> Result<Option<BlogRecord>> {
        Ok(self.read()?.blogs.into_iter().find(|b| b.domain == domain))
    }

    /// Insert a record, replacing any existing record for the same domain
    pub fn upsert(&self, record: BlogRecord) -> Result<()> {
        let mut file = self.read()?;
        match file.blogs.iter_mut().find(|b| b.domain == record.domain) {
            Some(existing) => *existing = record,
            None => file.blogs.push(record),
        }
        self.write(&file)
    }

    /// Record the blog's address and flag it as fully deployed
    pub fn mark_deployed(&self, domain: &str, ip: &str) -> Result<()> {
        let mut file = self.read()?;
        let Some(record) = file.blogs.iter_mut().find(|b| b.domain == domain) else {
            return Err(BlogError::StoreError(format!(
                "No record for blog {} in {}",
                domain,
                self.path.display()
            )));
        };

        record.ip = Some(ip.to_string());
        record.deployed = true;
        record.deployed_at = Some(Utc::now());
        self.write(&file)
    }

    /// Remove the record for a domain, returning whether one existed
    pub fn remove(&self, domain: &str) -> Result<bool> {
        let mut file = self.read()?;
        let before = file.blogs.len();
        file.blogs.retain(|b| b.domain != domain);

        if file.blogs.len() == before {
            return Ok(false);
        }
        self.write(&file)?;
        Ok(true)
    }

    fn read(&self) -> Result<StoreFile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Record store {} does not exist yet", self.path.display());
                return Ok(StoreFile::default());
            }
            Err(e) => {
                return Err(BlogError::StoreError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            BlogError::StoreError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write(&self, file: &StoreFile) -> Result<()> {
        let json = serde_json::to_string_pretty(file)
            .map_err(|e| BlogError::StoreError(format!("Failed to serialize records: {}", e)))?;

        fs::write(&self.path, json).map_err(|e| {
            BlogError::StoreError(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}
