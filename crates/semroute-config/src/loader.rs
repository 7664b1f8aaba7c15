// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./semroute.toml` >
//! `~/.config/semroute/semroute.toml` > `/etc/semroute/semroute.toml`,
//! with environment variable overrides via the `SEMROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SemrouteConfig;

/// Load configuration from the standard XDG hierarchy with env overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults (the reference catalog and tuning)
/// 2. `/etc/semroute/semroute.toml` (system-wide)
/// 3. `~/.config/semroute/semroute.toml` (user XDG config)
/// 4. `./semroute.toml` (local directory)
/// 5. `SEMROUTE_*` environment variables
pub fn load_config() -> Result<SemrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SemrouteConfig::default()))
        .merge(Toml::file("/etc/semroute/semroute.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("semroute/semroute.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("semroute.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string (testing and embedding).
pub fn load_config_from_str(toml_content: &str) -> Result<SemrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SemrouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<SemrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SemrouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment variable provider with explicit section mapping.
///
/// Uses `Env::map()` instead of `Env::split("_")` so keys containing
/// underscores stay intact: `SEMROUTE_ROUTING_DECAY_CONSTANT` must map to
/// `routing.decay_constant`, not `routing.decay.constant`. The handler
/// catalog is an array and is deliberately not settable via environment.
fn env_provider() -> Env {
    Env::prefixed("SEMROUTE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("intent_", "intent.", 1)
            .replacen("complexity_", "complexity.", 1)
            .replacen("index_", "index.", 1);
        mapped.into()
    })
}
