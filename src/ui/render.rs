// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use ratatui::{
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::{
    chart::{profile_chart, reference_line, x_bounds, ChartStyles},
    msg_theme::style_for,
    style::{get_axis_style, get_line_style},
    UI,
};

const STATUS_HEIGHT: u16 = 1;
const KEY_HINTS: &str = "Enter: next  Esc: quit";

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let area = f.area();
    ui.set_frame_size(Size {
        width: area.width,
        height: area.height,
    });
    debug!("frame size: {:?}", area);

    let [chart_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(area);

    render_chart(f, ui, chart_area);
    render_status(f, ui, status_area);
}

fn render_chart(f: &mut Frame, ui: &UI, area: Rect) {
    let Some(profile) = ui.app().current_profile() else {
        f.render_widget(Block::bordered().title("No more sequences"), area);
        return;
    };
    let points = profile.positions();
    let reference = reference_line(x_bounds(profile.scores.len()));
    let theme = ui.theme();
    let styles = ChartStyles {
        line: get_line_style(theme, ui.line_color()),
        reference: get_line_style(theme, ui.reference_color()),
        axis: get_axis_style(theme),
    };
    f.render_widget(profile_chart(profile, &points, &reference, &styles), area);
}

fn render_status(f: &mut Frame, ui: &UI, area: Rect) {
    let app = ui.app();
    let mut spans = match app.current_profile() {
        Some(p) => vec![Span::raw(format!(
            " {}/{} │ {} │ {} aa │ window {} │ {} ",
            app.current_index() + 1,
            app.num_profiles(),
            p.id,
            p.seq_len,
            p.window_size,
            KEY_HINTS
        ))],
        None => vec![Span::raw(format!(" {} ", app.filename))],
    };
    let msg = app.current_msg();
    if !msg.message.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", msg.message),
            style_for(&msg.kind, ui.theme()),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
