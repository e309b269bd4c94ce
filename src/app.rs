// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier


use log::{debug, warn};

use crate::{
    errors::HydropathError,
    hydropathy::Profile,
    seq::file::SeqMap,
};

#[derive(Clone, Debug, PartialEq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

// Simple, 1-line message (possibly just "")
pub struct CurrentMessage {
    pub message: String,
    pub kind: MessageKind,
}

pub struct App {
    pub filename: String,
    pub window_size: usize,
    // One profile per sequence, in file order. All are computed before the first chart is shown,
    // so that a failure aborts the run before any output.
    profiles: Vec<Profile>,
    current: usize,
    current_msg: CurrentMessage,
}

impl App {
    pub fn new(path: &str, window_size: usize, profiles: Vec<Profile>) -> Self {
        let mut app = App {
            filename: path.to_string(),
            window_size,
            profiles,
            current: 0,
            current_msg: CurrentMessage {
                message: String::from(""),
                kind: MessageKind::Info,
            },
        };
        app.announce_current();
        app
    }

    pub fn from_seq_map(
        path: &str,
        sequences: &SeqMap,
        window_size: usize,
    ) -> Result<Self, HydropathError> {
        let profiles = sequences
            .iter()
            .map(|(id, seq)| {
                let profile = Profile::new(id, seq, window_size)?;
                debug!("{}: {} residues, {} scores", id, profile.seq_len, profile.scores.len());
                Ok(profile)
            })
            .collect::<Result<Vec<Profile>, HydropathError>>()?;
        Ok(App::new(path, window_size, profiles))
    }

    pub fn num_profiles(&self) -> usize {
        self.profiles.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_profile(&self) -> Option<&Profile> {
        self.profiles.get(self.current)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Closes the current chart. Returns false once there is nothing left to show.
    pub fn advance(&mut self) -> bool {
        if self.current < self.profiles.len() {
            self.current += 1;
        }
        self.announce_current();
        self.current < self.profiles.len()
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.profiles.len()
    }

    fn announce_current(&mut self) {
        let msg = match self.current_profile() {
            Some(p) if p.is_empty() => {
                warn!(
                    "{}: sequence ({} residues) is shorter than the window ({})",
                    p.id, p.seq_len, p.window_size
                );
                Some(format!(
                    "Sequence shorter than window ({} < {}): nothing to plot",
                    p.seq_len, p.window_size
                ))
            }
            _ => None,
        };
        match msg {
            Some(m) => self.warning_msg(m),
            None => self.clear_msg(),
        }
    }

    // Messages

    pub fn current_msg(&self) -> &CurrentMessage {
        &self.current_msg
    }

    pub fn info_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            message: msg.into(),
            kind: MessageKind::Info,
        };
    }

    pub fn warning_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            message: msg.into(),
            kind: MessageKind::Warning,
        };
    }

    pub fn error_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            message: msg.into(),
            kind: MessageKind::Error,
        };
    }

    /// Shows an error without hiding the message already on display.
    pub fn add_error_msg(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        let message = if self.current_msg.message.is_empty() {
            msg
        } else {
            format!("{} | {}", msg, self.current_msg.message)
        };
        self.error_msg(message);
    }

    pub fn clear_msg(&mut self) {
        self.info_msg("");
    }
}
