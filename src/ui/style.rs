// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::style::{Color, Style};

use super::Theme;

pub fn get_line_style(theme: Theme, color: Color) -> Style {
    match theme {
        Theme::Color => Style::default().fg(color),
        Theme::Monochrome => Style::default().fg(Color::Reset).bg(Color::Reset),
    }
}

pub fn get_axis_style(theme: Theme) -> Style {
    match theme {
        Theme::Color => Style::default().fg(Color::Gray),
        Theme::Monochrome => Style::default(),
    }
}
