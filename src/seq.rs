// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod fasta;
pub mod file;
pub mod record;

use std::path::Path;

use log::info;

use crate::errors::HydropathError;
use crate::seq::fasta::read_fasta_file;
use crate::seq::file::SeqMap;

/// Loads a FastA file into an identifier -> sequence map, in file order.
///
/// Fails with `NotFound` if `path` is not an existing file, and with `Format` if the contents are
/// not FastA.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SeqMap, HydropathError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(HydropathError::NotFound(path.display().to_string()));
    }
    let records = read_fasta_file(path)?;
    info!("Read {} record(s) from {}", records.len(), path.display());
    Ok(SeqMap::from_records(records))
}
