use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Position, Rect},
    Terminal,
    TerminalOptions, Viewport,
};

use hydropath::{
    app::App,
    seq,
    ui::{render::render_ui, UI},
};

pub fn render(app: &mut App, w: u16, h: u16) -> Buffer {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let mut ui = UI::new(app);
    terminal.draw(|f| render_ui(f, &mut ui)).expect("draw");
    terminal.backend().buffer().clone()
}

pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        out.push_str(&screen_line(buf, y));
        out.push('\n');
    }
    out
}

pub fn keypress(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::NONE,
    }
}

pub fn load_app(path: &str, window_size: usize) -> App {
    let sequences = seq::load(path).expect("read");
    App::from_seq_map(path, &sequences, window_size).expect("score")
}

pub fn with_rig<F>(path: &str, term_width: u16, term_height: u16, mut f: F)
where
    F: FnMut(&mut UI, &mut Terminal<TestBackend>),
{
    let mut app = load_app(path, 9);
    let mut ui = UI::new(&mut app);

    let backend = TestBackend::new(term_width, term_height);
    let viewport = Viewport::Fixed(Rect::new(0, 0, term_width, term_height));
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })
        .expect("creating test-backend terminal");

    // Initial draw
    terminal.draw(|f| render_ui(f, &mut ui)).expect("initial draw");

    // Events and assertions here
    f(&mut ui, &mut terminal);
}

pub fn screen_line(buffer: &Buffer, y: u16) -> String {
    let screen = buffer.area;
    (0..screen.width)
        .map(|x| {
            buffer
                .cell(Position::from((x, y)))
                .expect("Wrong position")
                .symbol()
        })
        .collect()
}
