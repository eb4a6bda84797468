//! Localized message lookup.
//!
//! Bundles are YAML files with a `messages` map of key to pattern. Patterns
//! use `{0}`, `{1}`, ... for positional arguments. A missing key never fails:
//! it renders as `!key!` so the gap is visible on screen.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub trait MessageSource {
    fn pattern(&self, key: &str) -> Option<&str>;

    fn get(&self, key: &str) -> String {
        self.format(key, &[])
    }

    fn format(&self, key: &str, args: &[&str]) -> String {
        match self.pattern(key) {
            Some(p) => apply_pattern(p, args),
            None => {
                debug!(key, "missing message key");
                format!("!{key}!")
            }
        }
    }
}

/// Substitutes `{n}` with `args[n]`. Placeholders without a matching
/// argument, and any other braces, are copied through unchanged.
pub fn apply_pattern(pattern: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let arg = after.find('}').and_then(|end| {
            after[..end]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|a| (end, *a))
        });
        match arg {
            Some((end, a)) => {
                out.push_str(a);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Deserialize, Clone, Default)]
struct BundleFile {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Message bundle loaded from YAML.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    locale: Option<String>,
    entries: HashMap<String, String>,
}

impl Messages {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let file: BundleFile = serde_yaml::from_str(s).context("invalid message bundle")?;
        Ok(Self {
            locale: file.locale,
            entries: file.messages,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading message bundle {}", path.display()))?;
        Self::from_yaml_str(&s).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageSource for Messages {
    fn pattern(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
