//! Import alias resolution through the project's tsconfig.json
//!
//! Mirrors how TypeScript maps a path alias to a directory: `compilerOptions.paths`
//! patterns (at most one `*`) are matched against the alias, the longest
//! matching prefix wins, and the first target is resolved against `baseUrl`
//! (or the directory of the config that declared `paths`).

use crate::error::ResolveError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Name of the TypeScript project file looked up in the working directory
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// How many `extends` hops are followed before giving up
const MAX_EXTENDS_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Extends {
    One(String),
    Many(Vec<String>),
}

impl Extends {
    /// The config whose options apply last
    fn last(&self) -> Option<&str> {
        match self {
            Extends::One(parent) => Some(parent),
            Extends::Many(parents) => parents.last().map(String::as_str),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTsconfig {
    #[serde(default)]
    extends: Option<Extends>,
    #[serde(rename = "compilerOptions", default)]
    compiler_options: RawCompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
struct RawCompilerOptions {
    #[serde(rename = "baseUrl", default)]
    base_url: Option<String>,
    #[serde(default)]
    paths: Option<BTreeMap<String, Vec<String>>>,
}

/// Path mapping options after following `extends`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// The tsconfig.json that was loaded
    pub config_path: PathBuf,
    /// Absolute base URL, if any config in the chain set one
    pub base_url: Option<PathBuf>,
    /// Directory of the config that declared `paths`
    pub paths_dir: PathBuf,
    /// Alias patterns and their targets
    pub paths: BTreeMap<String, Vec<String>>,
}

impl PathMapping {
    /// Load `tsconfig.json` from a project directory
    pub fn load(project_dir: &Path) -> Result<Self, ResolveError> {
        let config_path = project_dir.join(TSCONFIG_FILE);
        if !config_path.is_file() {
            return Err(ResolveError::MissingTsconfig(project_dir.to_path_buf()));
        }

        let mut mapping = Self {
            config_path: config_path.clone(),
            base_url: None,
            paths_dir: project_dir.to_path_buf(),
            paths: BTreeMap::new(),
        };
        let mut have_paths = false;

        // Walk child to parent; options already found in a child win.
        let mut next = Some(config_path);
        let mut depth = 0;
        while let Some(path) = next.take() {
            let raw = read_tsconfig(&path)?;
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

            if mapping.base_url.is_none() {
                mapping.base_url = raw
                    .compiler_options
                    .base_url
                    .map(|base| normalize(&dir.join(base)));
            }
            if !have_paths {
                if let Some(paths) = raw.compiler_options.paths {
                    mapping.paths = paths;
                    mapping.paths_dir = dir.clone();
                    have_paths = true;
                }
            }

            depth += 1;
            next = match raw.extends.as_ref().and_then(Extends::last) {
                Some(parent) if depth < MAX_EXTENDS_DEPTH => resolve_extends(&dir, parent),
                _ => None,
            };
        }

        Ok(mapping)
    }

    /// Map an import alias to an absolute directory
    pub fn resolve(&self, alias: &str) -> Option<PathBuf> {
        let (pattern, captured) = self.best_match(alias)?;
        let target = self.paths.get(pattern)?.first()?;
        let target = target.replacen('*', captured, 1);
        let base = self.base_url.as_deref().unwrap_or(&self.paths_dir);
        Some(normalize(&base.join(target)))
    }

    /// Pattern with the longest prefix matching `alias`, and the text its `*` captured
    fn best_match<'a>(&'a self, alias: &'a str) -> Option<(&'a str, &'a str)> {
        let mut best: Option<(&str, &str, usize)> = None;

        for pattern in self.paths.keys() {
            match pattern.split_once('*') {
                None => {
                    if pattern == alias {
                        return Some((pattern.as_str(), ""));
                    }
                }
                Some((prefix, suffix)) => {
                    let fits = alias.len() >= prefix.len() + suffix.len()
                        && alias.starts_with(prefix)
                        && alias.ends_with(suffix);
                    if !fits {
                        continue;
                    }
                    if best.map_or(true, |(_, _, len)| prefix.len() > len) {
                        let captured = &alias[prefix.len()..alias.len() - suffix.len()];
                        best = Some((pattern.as_str(), captured, prefix.len()));
                    }
                }
            }
        }

        best.map(|(pattern, captured, _)| (pattern, captured))
    }
}

/// Resolve the components alias of a project to the directory it points at
pub fn resolve_alias_dir(project_dir: &Path, alias: &str) -> Result<PathBuf, ResolveError> {
    if !project_dir.is_dir() {
        return Err(ResolveError::MissingDirectory(project_dir.to_path_buf()));
    }

    let mapping = PathMapping::load(project_dir)?;
    let resolved = mapping
        .resolve(alias)
        .ok_or_else(|| ResolveError::UnresolvedAlias {
            alias: alias.to_string(),
            tsconfig: mapping.config_path.clone(),
        })?;

    tracing::debug!(alias, path = %resolved.display(), "resolved import alias");
    Ok(resolved)
}

fn read_tsconfig(path: &Path) -> Result<RawTsconfig, ResolveError> {
    let content = std::fs::read_to_string(path).map_err(|source| ResolveError::ReadTsconfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&strip_json_extras(&content)).map_err(|source| {
        ResolveError::ParseTsconfig {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Only relative `extends` are followed; package configs are skipped
fn resolve_extends(dir: &Path, parent: &str) -> Option<PathBuf> {
    if !parent.starts_with('.') {
        tracing::debug!(extends = parent, "skipping non-relative tsconfig extends");
        return None;
    }
    let mut path = dir.join(parent);
    if path.extension().is_none() {
        path.set_extension("json");
    }
    path.is_file().then_some(path)
}

/// Drop comments and trailing commas so tsconfig text parses as strict JSON
fn strip_json_extras(source: &str) -> String {
    let without_comments = scan_outside_strings(source, |rest, out| {
        if rest.starts_with("//") {
            let end = rest.find('\n').unwrap_or(rest.len());
            Some(end)
        } else if rest.starts_with("/*") {
            let end = rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
            out.push(' ');
            Some(end)
        } else {
            None
        }
    });

    scan_outside_strings(&without_comments, |rest, _| {
        if rest.starts_with(',') {
            let after = rest[1..].trim_start();
            if after.starts_with('}') || after.starts_with(']') {
                return Some(1);
            }
        }
        None
    })
}

/// Copy `source`, letting `skip` drop spans that start outside string literals
///
/// `skip` returns how many bytes to drop at the current position.
fn scan_outside_strings(
    source: &str,
    mut skip: impl FnMut(&str, &mut String) -> Option<usize>,
) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < source.len() {
        let rest = &source[i..];
        let Some(c) = rest.chars().next() else { break };

        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(len) = skip(rest, &mut out) {
            i += len;
            continue;
        }

        out.push(c);
        i += c.len_utf8();
    }

    out
}

/// Lexically clean a path (drop `.`, fold `..`)
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
