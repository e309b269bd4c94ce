// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use log::warn;

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is a map from record id to raw sequence. Ids keep the order in
// which they were first seen; a later record with an already-seen id replaces that id's sequence.

#[derive(Debug, Default)]
pub struct SeqMap {
    order: Vec<String>,
    sequences: HashMap<String, String>,
}

impl SeqMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SeqRecord>) -> Self {
        let mut map = SeqMap::new();
        for record in records {
            let id = record.id().to_string();
            map.insert(id, record.sequence);
        }
        map
    }

    pub fn insert(&mut self, id: String, sequence: String) {
        if let Some(previous) = self.sequences.get_mut(&id) {
            warn!("Duplicate sequence id '{}': keeping the later sequence", id);
            *previous = sequence;
        } else {
            self.order.push(id.clone());
            self.sequences.insert(id, sequence);
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// (id, sequence) pairs, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|id| self.sequences.get(id).map(|seq| (id.as_str(), seq.as_str())))
    }
}
