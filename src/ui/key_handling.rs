// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use log::debug;

use super::UI;

/// Returns true IFF the run is over, either because the last chart was closed or because the user
/// aborted.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    let mut done = false;
    match key_event.code {
        // Ctrl-C and Esc abandon the remaining charts
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            abort(ui);
            done = true;
        }
        KeyCode::Esc => {
            abort(ui);
            done = true;
        }
        // Closing a chart moves on to the next one
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('q')
        | KeyCode::Char('Q') => {
            let more = ui.app_mut().advance();
            debug!("chart closed, more to show: {}", more);
            ui.mark_dirty();
            done = !more;
        }
        _ => {}
    }
    done
}

fn abort(ui: &mut UI) {
    let app = ui.app();
    let msg = format!(
        "Stopped after {} of {} sequence(s)",
        app.current_index(),
        app.num_profiles()
    );
    ui.set_exit_message(msg);
}
