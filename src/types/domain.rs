// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_LEN: usize = 63;

/// A blog domain. Doubles as the namespace name, so it must be a DNS-1123 label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid domain '{input}': {reason}")]
pub struct InvalidDomainError {
    pub input: String,
    pub reason: &'static str,
}

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = InvalidDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidDomainError {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if s.len() > MAX_LEN {
            return Err(invalid("must be at most 63 characters"));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(invalid("must consist of lower case alphanumeric characters or '-'"));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(invalid("must start and end with an alphanumeric character"));
        }

        Ok(Domain(s.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
