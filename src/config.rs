// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use hex_color::HexColor;
use log::warn;
use ratatui::style::Color;
use serde::Deserialize;

use crate::errors::HydropathError;

pub const CONFIG_FILE_NAME: &str = ".hydropathconfig";

/// Contents of a `.hydropathconfig` file (JSON). Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HydropathConfig {
    pub window_size: Option<usize>,
    pub line_color: Option<HexColor>,
    pub reference_color: Option<HexColor>,
}

impl HydropathConfig {
    pub fn from_file(path: &Path) -> Result<Self, HydropathError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, HydropathError> {
        let mut config: HydropathConfig = serde_json::from_str(text)?;
        if config.window_size == Some(0) {
            warn!("Ignoring window_size 0 in config");
            config.window_size = None;
        }
        Ok(config)
    }

    pub fn line_color(&self) -> Option<Color> {
        self.line_color.map(to_color)
    }

    pub fn reference_color(&self) -> Option<Color> {
        self.reference_color.map(to_color)
    }
}

fn to_color(hex: HexColor) -> Color {
    Color::Rgb(hex.r, hex.g, hex.b)
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
