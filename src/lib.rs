// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod app;
pub mod config;
pub mod errors;
pub mod hydropathy;
mod runner;
pub mod seq;
pub mod ui;

use crate::errors::HydropathError;

pub fn run() -> Result<(), HydropathError> {
    runner::run()
}
