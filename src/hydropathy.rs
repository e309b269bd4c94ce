// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Kyte-Doolittle hydropathy profiles.
//!
//! The scale is kept in tenths so that window sums are exact; each score then costs a single
//! (correctly rounded) division.

use crate::errors::HydropathError;

pub const DEFAULT_WINDOW_SIZE: usize = 9;

/// The 20 residues that have a Kyte-Doolittle value.
pub const RESIDUES: &str = "ARNDCQEGHILKMFPSTWYV";

// Kyte & Doolittle (1982), times 10. Anything not in the table counts as 0.
const fn kd_tenths(residue: char) -> i64 {
    match residue {
        'A' => 18,
        'R' => -45,
        'N' => -35,
        'D' => -35,
        'C' => 25,
        'Q' => -35,
        'E' => -35,
        'G' => -4,
        'H' => -32,
        'I' => 45,
        'L' => 38,
        'K' => -39,
        'M' => 19,
        'F' => 28,
        'P' => -16,
        'S' => -8,
        'T' => -7,
        'W' => -9,
        'Y' => -13,
        'V' => 42,
        _ => 0,
    }
}

/// Hydropathy value of a single residue; 0 for anything outside the table (including lowercase).
pub fn hydropathy(residue: char) -> f64 {
    kd_tenths(residue) as f64 / 10.0
}

/// Sliding-window average hydropathy. Returns one score per window, i.e. `len - window_size + 1`
/// scores, or none if the sequence is shorter than the window.
pub fn kyte_doolittle(sequence: &str, window_size: usize) -> Result<Vec<f64>, HydropathError> {
    if window_size == 0 {
        return Err(HydropathError::Window(window_size));
    }
    let residues: Vec<char> = sequence.chars().collect();
    if window_size > residues.len() {
        return Ok(Vec::new());
    }
    let denominator = 10.0 * window_size as f64;
    Ok(residues
        .windows(window_size)
        .map(|window| window.iter().map(|&r| kd_tenths(r)).sum::<i64>() as f64 / denominator)
        .collect())
}

/// A score series together with the sequence it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub seq_len: usize,
    pub window_size: usize,
    pub scores: Vec<f64>,
}

impl Profile {
    pub fn new(id: &str, sequence: &str, window_size: usize) -> Result<Self, HydropathError> {
        let scores = kyte_doolittle(sequence, window_size)?;
        Ok(Profile {
            id: id.to_string(),
            seq_len: sequence.chars().count(),
            window_size,
            scores,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Chart points: x is the 1-based window position.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ((i + 1) as f64, score))
            .collect()
    }
}
