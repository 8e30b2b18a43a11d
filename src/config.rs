//! Runtime configuration: process environment first, then an optional `.env` file.
//!
//! The `.env` file never overrides a variable already set in the process
//! environment. Invalid values are logged and replaced by defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use tracing::{debug, info, warn};

use crate::cycle::DEFAULT_CYCLE_TARGET;
use crate::error::ConfigError;
use crate::points::PointValue;

/// Points at a `.env` file to use instead of `./.env`.
pub const DOTENV_PATH_VAR: &str = "DOTENV_PATH";
pub const POINT_VALUE_VARS: [&str; 2] = ["POINT_VALUE_BRL", "PONTO_VALOR_BRL"];
pub const CYCLE_TARGET_VAR: &str = "CYCLE_TARGET_DAYS";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub point_value: PointValue,
    pub cycle_target: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { point_value: PointValue::default(), cycle_target: DEFAULT_CYCLE_TARGET }
    }
}

impl Config {
    /// Process environment overlaid on the first readable `.env` candidate.
    pub fn load() -> Self {
        let dotenv = load_dotenv();
        Self::from_lookup(|key| env::var(key).ok().or_else(|| dotenv.vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        match POINT_VALUE_VARS.iter().find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()).map(|v| (*key, v))) {
            Some((key, raw)) => match parse_point_value(key, &raw) {
                Ok(value) => cfg.point_value = value,
                Err(e) => warn!("{e}, using default {}", cfg.point_value.get()),
            },
            None => info!("{} not set, using default: {}", POINT_VALUE_VARS[0], cfg.point_value.get()),
        }

        match lookup(CYCLE_TARGET_VAR) {
            Some(raw) => match parse_cycle_target(&raw) {
                Ok(target) => cfg.cycle_target = target,
                Err(e) => warn!("{e}, using default {}", cfg.cycle_target),
            },
            None => info!("{CYCLE_TARGET_VAR} not set, using default: {}", cfg.cycle_target),
        }

        cfg
    }
}

fn parse_point_value(key: &'static str, raw: &str) -> Result<PointValue, ConfigError> {
    let invalid = || ConfigError::InvalidValue { key, value: raw.to_string() };
    let parsed: f64 = raw.trim().parse().map_err(|_| invalid())?;
    PointValue::new(parsed).map_err(|_| invalid())
}

fn parse_cycle_target(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(target) if target > 0 => Ok(target),
        _ => Err(ConfigError::InvalidValue { key: CYCLE_TARGET_VAR, value: raw.to_string() }),
    }
}

/// Variables read from a `.env` file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dotenv {
    pub path: Option<PathBuf>,
    pub vars: HashMap<String, String>,
}

/// `$DOTENV_PATH` if set, then `./.env`.
pub fn dotenv_candidates() -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(2);
    if let Ok(custom) = env::var(DOTENV_PATH_VAR) {
        if !custom.trim().is_empty() {
            out.push(PathBuf::from(custom));
        }
    }
    out.push(PathBuf::from(".env"));
    out
}

/// First readable candidate wins; no file is not an error.
pub fn load_dotenv() -> Dotenv {
    for path in dotenv_candidates() {
        if !path.exists() {
            continue;
        }
        match read_dotenv(&path) {
            Ok(vars) => {
                debug!("loaded {} variables from {}", vars.len(), path.display());
                return Dotenv { vars: vars.into_iter().collect(), path: Some(path) };
            }
            Err(e) => warn!("{e}"),
        }
    }
    Dotenv::default()
}

pub fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
    Ok(parse_dotenv(&content))
}

/// Parses `KEY=value` lines. Later duplicates win when collected into a map.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (key, raw) = trimmed.split_once('=')?;
    let key = key.trim();
    if !is_valid_key(key) {
        return None;
    }
    Some((key.to_string(), normalize_value(raw)))
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

fn normalize_value(raw: &str) -> String {
    let mut value = raw.trim();
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"')) || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        value = &value[1..value.len() - 1];
    }
    value.replace("\\n", "\n").replace("\\r", "\r")
}
