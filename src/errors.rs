// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum HydropathError {
    Io(io::Error),
    NotFound(String),
    Format(String),
    Window(usize),
    Config(String),
}

// These allow conversion to HydropathError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for HydropathError {
    fn from(e: io::Error) -> Self {
        HydropathError::Io(e)
    }
}

impl From<String> for HydropathError {
    fn from(s: String) -> Self {
        HydropathError::Format(s)
    }
}

impl From<serde_json::Error> for HydropathError {
    fn from(e: serde_json::Error) -> Self {
        HydropathError::Config(e.to_string())
    }
}

impl fmt::Display for HydropathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HydropathError::Io(e) => write!(f, "I/O error: {}", e),
            HydropathError::NotFound(path) => write!(f, "File not found: {}", path),
            HydropathError::Format(msg) => write!(f, "Format error: {}", msg),
            HydropathError::Window(size) => write!(f, "Invalid window size: {}", size),
            HydropathError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for HydropathError {}
