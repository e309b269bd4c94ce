// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::HydropathError;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeqRecord>, HydropathError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<SeqRecord>, HydropathError> {
    let mut result: Vec<SeqRecord> = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let l = line?;
        let trimmed = l.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(hdr) = trimmed.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: hdr.trim_start().to_string(),
                sequence: String::new(),
            });
        } else {
            match current_record.as_mut() {
                // append line to current record's sequence
                Some(record) => record
                    .sequence
                    .extend(trimmed.chars().filter(|c| *c != ' ')),
                // comments are only tolerated before the first header
                None if trimmed.starts_with(';') => {}
                None => {
                    return Err(HydropathError::Format(format!(
                        "line {}: expected a '>' header, found '{}'",
                        lineno + 1,
                        trimmed
                    )))
                }
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}
