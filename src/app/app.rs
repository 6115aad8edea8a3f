use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{analyze, Analysis, Config, EngineError, SizeConfig};
use crate::input::{self, LoadedDocument};
use crate::ui::command::{command_to_app_event, parse_command};

/// Owns the text and settings; re-runs the engine whenever either changes.
pub struct App {
    mode: AppMode,
    config: Config,
    text: String,
    source: Option<String>,
    analysis: Analysis,
    command_buffer: String,
    status: Option<String>,
    show_help: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Start with the given settings. An invalid size config falls back to the default.
    pub fn with_config(config: Config) -> Self {
        let mut app = Self {
            mode: AppMode::Viewing,
            config: Config {
                size: SizeConfig::default(),
                ..config
            },
            text: String::new(),
            source: None,
            analysis: Analysis::default(),
            command_buffer: String::new(),
            status: None,
            show_help: false,
        };
        let _ = app.apply_size_config(config.size);
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.reanalyze();
    }

    pub fn load_document(&mut self, doc: LoadedDocument) {
        self.status = Some(format!("Loaded {}", doc.source));
        self.source = Some(doc.source);
        self.set_text(doc.text);
    }

    /// Swap in a new size config, keeping the current one if the new one is invalid.
    pub fn apply_size_config(&mut self, size: SizeConfig) -> Result<(), EngineError> {
        if let Err(err) = size.validate() {
            tracing::warn!(error = %err, "rejected size config");
            self.status = Some(err.to_string());
            return Err(err);
        }
        self.config.size = size;
        self.reanalyze();
        Ok(())
    }

    fn reanalyze(&mut self) {
        match analyze(&self.text, &self.config.size) {
            Ok(analysis) => self.analysis = analysis,
            Err(err) => {
                tracing::warn!(error = %err, "analysis skipped");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => match input::load_path(&path) {
                Ok(doc) => self.load_document(doc),
                Err(err) => self.status = Some(err.to_string()),
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(doc) => self.load_document(doc),
                Err(err) => self.status = Some(err.to_string()),
            },
            AppEvent::SetText(text) => self.set_text(text),
            AppEvent::InsertChar(c) => {
                self.text.push(c);
                self.reanalyze();
            }
            AppEvent::DeleteChar => {
                if self.text.pop().is_some() {
                    self.reanalyze();
                }
            }
            AppEvent::SetLaw(law) => {
                let _ = self.apply_size_config(SizeConfig {
                    law,
                    ..self.config.size
                });
            }
            AppEvent::CycleLaw => {
                let law = self.config.size.law.next();
                self.handle_event(AppEvent::SetLaw(law));
            }
            AppEvent::AdjustScale(steps) => {
                let _ = self.apply_size_config(self.config.size.with_scale_steps(steps));
            }
            AppEvent::SetScale(scale) => {
                let _ = self.apply_size_config(SizeConfig {
                    scale,
                    ..self.config.size
                });
            }
            AppEvent::AdjustSpacing(steps) => {
                let _ = self.apply_size_config(self.config.size.with_spacing_steps(steps));
            }
            AppEvent::SetSpacing(spacing) => {
                let _ = self.apply_size_config(SizeConfig {
                    spacing,
                    ..self.config.size
                });
            }
            AppEvent::ToggleGrid => self.config.display.gridded = !self.config.display.gridded,
            AppEvent::ToggleBreaks => {
                self.config.display.show_breaks = !self.config.display.show_breaks
            }
            AppEvent::ToggleStats => self.config.display.show_stats = !self.config.display.show_stats,
            AppEvent::Reset => {
                self.config.reset();
                self.reanalyze();
                self.status = Some("Settings reset".to_string());
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    /// Single-key shortcuts while viewing
    pub fn handle_keypress(&mut self, key: char) {
        if self.mode != AppMode::Viewing {
            return;
        }
        let event = match key {
            'q' => AppEvent::Quit,
            'l' => AppEvent::CycleLaw,
            '+' | '=' => AppEvent::AdjustScale(1),
            '-' | '_' => AppEvent::AdjustScale(-1),
            ']' => AppEvent::AdjustSpacing(1),
            '[' => AppEvent::AdjustSpacing(-1),
            'g' => AppEvent::ToggleGrid,
            'b' => AppEvent::ToggleBreaks,
            's' => AppEvent::ToggleStats,
            'r' => AppEvent::Reset,
            'h' | '?' => AppEvent::Help,
            'p' => AppEvent::LoadClipboard,
            'i' => {
                self.mode = AppMode::Editing;
                self.show_help = false;
                self.status = None;
                AppEvent::None
            }
            ':' | '@' => {
                self.enter_command_mode(key);
                AppEvent::None
            }
            _ => AppEvent::None,
        };
        self.handle_event(event);
    }

    fn enter_command_mode(&mut self, prefix: char) {
        self.mode = AppMode::Command;
        self.command_buffer.clear();
        self.command_buffer.push(prefix);
        self.status = None;
    }

    pub fn push_command_char(&mut self, c: char) {
        if self.mode == AppMode::Command {
            self.command_buffer.push(c);
        }
    }

    /// Deletes the last typed character; leaves command mode once the buffer is empty.
    pub fn pop_command_char(&mut self) {
        if self.mode != AppMode::Command {
            return;
        }
        self.command_buffer.pop();
        if self.command_buffer.is_empty() {
            self.mode = AppMode::Viewing;
        }
    }

    pub fn cancel_command(&mut self) {
        self.command_buffer.clear();
        if self.mode == AppMode::Command {
            self.mode = AppMode::Viewing;
        }
    }

    pub fn submit_command(&mut self) {
        if self.mode != AppMode::Command {
            return;
        }
        let input = std::mem::take(&mut self.command_buffer);
        self.mode = AppMode::Viewing;
        let event = command_to_app_event(parse_command(&input));
        self.handle_event(event);
    }

    /// Typed characters while editing. Enter inserts a line break.
    pub fn edit_char(&mut self, c: char) {
        if self.mode == AppMode::Editing {
            self.handle_event(AppEvent::InsertChar(c));
        }
    }

    pub fn edit_backspace(&mut self) {
        if self.mode == AppMode::Editing {
            self.handle_event(AppEvent::DeleteChar);
        }
    }

    pub fn finish_editing(&mut self) {
        if self.mode == AppMode::Editing {
            self.mode = AppMode::Viewing;
            tracing::debug!(chars = self.text.chars().count(), "finished editing");
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::from_analysis(self.mode, self.config, &self.analysis);
        state.source = self.source.clone();
        state.status = self.status.clone();
        state.show_help = self.show_help;
        if self.mode == AppMode::Command {
            state.command_input = Some(self.command_buffer.clone());
        }
        if self.mode == AppMode::Editing {
            let line = self.text.rsplit(['\n', '\r', '\u{000b}', '\u{000c}']).next();
            state.edit_line = Some(line.unwrap_or_default().to_string());
        }
        state
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
