//! Startup settings for the sequencer GUI, layered file -> environment.
//! CLI flags are applied on top by `main`.

use std::{collections::HashMap, env, fs, path::PathBuf};

pub const SETTINGS_FILE: &str = "sequencer.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub catalog_path: Option<PathBuf>,
    pub shuffle_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1080.0,
            window_height: 720.0,
            catalog_path: None,
            shuffle_seed: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_settings(&mut settings);

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("catalog_path") {
            settings.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = file_cfg.get("shuffle_seed").and_then(|v| v.parse().ok()) {
            settings.shuffle_seed = Some(v);
        }
        if let Some(v) = file_cfg.get("window_width").and_then(|v| v.parse().ok()) {
            settings.window_width = v;
        }
        if let Some(v) = file_cfg.get("window_height").and_then(|v| v.parse().ok()) {
            settings.window_height = v;
        }
    }
}

fn apply_env_settings(settings: &mut Settings) {
    if let Ok(v) = env::var("SEQUENCER_CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Ok(v) = env::var("SEQUENCER_SEED") {
        if let Ok(seed) = v.parse() {
            settings.shuffle_seed = Some(seed);
        }
    }
}
