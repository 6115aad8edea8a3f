use crate::app::{App, AppEvent, AppMode, RenderState};
use crate::ui::bubbles::{layout_rows, render_bubbles};
use crate::ui::stats::render_stats_panel;
use crate::ui::view::{render_empty_hint, render_help, render_status_line, render_title};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::Duration;

static PANIC_HOOK_SET: Once = Once::new();

/// Height of the stats panel including its top border
const STATS_HEIGHT: u16 = 4;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    /// Draws, then redraws after every input event until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(250);
        self.render_frame(app)?;

        while app.mode() != AppMode::Quit {
            if !event::poll(poll_timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Event::Resize(_, _) => {}
                _ => continue,
            }
            self.render_frame(app)?;
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &state))?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.handle_event(AppEvent::Quit);
        return;
    }

    match app.mode() {
        AppMode::Command => match key.code {
            KeyCode::Enter => app.submit_command(),
            KeyCode::Esc => app.cancel_command(),
            KeyCode::Backspace => app.pop_command_char(),
            KeyCode::Char(c) => app.push_command_char(c),
            _ => {}
        },
        AppMode::Editing => match key.code {
            KeyCode::Esc => app.finish_editing(),
            KeyCode::Enter => app.edit_char('\n'),
            KeyCode::Tab => app.edit_char('\t'),
            KeyCode::Backspace => app.edit_backspace(),
            KeyCode::Char(c) => app.edit_char(c),
            _ => {}
        },
        AppMode::Viewing => {
            if let KeyCode::Char(c) = key.code {
                app.handle_keypress(c);
            }
        }
        AppMode::Quit => {}
    }
}

fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let stats_height = if state.config.display.show_stats {
        STATS_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(stats_height),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(render_title(state)), chunks[0]);

    if state.show_help {
        frame.render_widget(render_help(), chunks[1]);
    } else if state.is_empty() {
        frame.render_widget(render_empty_hint(), chunks[1]);
    } else {
        let rows = layout_rows(
            &state.bubbles,
            state.config.size.spacing,
            &state.config.display,
            chunks[1].width as usize,
        );
        frame.render_widget(render_bubbles(&rows), chunks[1]);
    }

    if state.config.display.show_stats {
        let panel = render_stats_panel(&state.stats, &state.config, chunks[2].width as usize);
        frame.render_widget(panel, chunks[2]);
    }

    frame.render_widget(render_status_line(state, chunks[3].width as usize), chunks[3]);
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            restore_terminal();
            tracing::error!("panic: {}", panic_info);
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
