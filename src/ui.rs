// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod chart;
pub mod key_handling;
mod msg_theme;
pub mod render;
mod style;

use ratatui::layout::Size;
use ratatui::style::Color;

use crate::app::App;

// matplotlib's default blue, so the plots look familiar
pub const DEFAULT_LINE_COLOR: Color = Color::Rgb(0x1f, 0x77, 0xb4);
pub const DEFAULT_REFERENCE_COLOR: Color = Color::Gray;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Color,
    Monochrome,
}

pub struct UI<'a> {
    app: &'a mut App,
    theme: Theme,
    line_color: Color,
    reference_color: Color,
    // Not known until the first draw.
    frame_size: Option<Size>,
    dirty: bool,
    exit_message: Option<String>,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a mut App) -> Self {
        UI {
            app,
            theme: Theme::Color,
            line_color: DEFAULT_LINE_COLOR,
            reference_color: DEFAULT_REFERENCE_COLOR,
            frame_size: None,
            dirty: false,
            exit_message: None,
        }
    }

    pub fn app(&self) -> &App {
        &*self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut *self.app
    }

    // ****************************************************************
    // Colors

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_monochrome(&mut self) {
        self.theme = Theme::Monochrome;
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    pub fn set_reference_color(&mut self, color: Color) {
        self.reference_color = color;
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn reference_color(&self) -> Color {
        self.reference_color
    }

    // ****************************************************************
    // Drawing state

    pub fn frame_size(&self) -> Option<Size> {
        self.frame_size
    }

    fn set_frame_size(&mut self, size: Size) {
        self.frame_size = Some(size);
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// True iff something changed since clear_dirty(); resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // ****************************************************************
    // Exit

    pub fn set_exit_message(&mut self, msg: impl Into<String>) {
        self.exit_message = Some(msg.into());
    }

    pub fn has_exit_message(&self) -> bool {
        self.exit_message.is_some()
    }

    pub fn take_exit_message(&mut self) -> Option<String> {
        self.exit_message.take()
    }
}
