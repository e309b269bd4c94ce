// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::app::MessageKind;
use ratatui::style::{Color, Style};

use super::Theme;

pub const INFO_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const WARNING_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

pub const ERROR_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red);

pub fn style_for(kind: &MessageKind, theme: Theme) -> Style {
    if theme == Theme::Monochrome {
        return Style::new();
    }
    match kind {
        MessageKind::Info => INFO_STYLE,
        MessageKind::Warning => WARNING_STYLE,
        MessageKind::Error => ERROR_STYLE,
    }
}
