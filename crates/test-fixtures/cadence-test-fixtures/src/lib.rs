use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "key-points")]
    key_points: HashMap<String, String>,
    #[serde(rename = "input-scripts")]
    input_scripts: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Key point documents (`{ "points": [...] }`).
pub mod key_points {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.key_points.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.key_points, "key point", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        super::load_json(lookup(&MANIFEST.key_points, "key point", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(&MANIFEST.key_points, "key point", name)?))
    }
}

/// Recorded input: one list of held key names per frame.
pub mod input_scripts {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct InputScript {
        pub frames: Vec<Vec<String>>,
    }

    pub fn keys() -> Vec<String> {
        MANIFEST.input_scripts.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<InputScript> {
        super::load_json(lookup(&MANIFEST.input_scripts, "input script", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(
            &MANIFEST.input_scripts,
            "input script",
            name,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_exist_on_disk() {
        for name in key_points::keys() {
            assert!(key_points::path(&name).unwrap().exists(), "{name}");
        }
        for name in input_scripts::keys() {
            assert!(input_scripts::path(&name).unwrap().exists(), "{name}");
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = key_points::json("missing").unwrap_err();
        assert!(err.to_string().contains("unknown key point fixture"));
    }
}
