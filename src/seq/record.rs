// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A record for sequences, consisting of some description and a raw sequence. The header is kept
// whole; the identifier is its first word.

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}
