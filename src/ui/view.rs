use crate::app::{AppMode, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

const HELP_LINES: &[(&str, &str)] = &[
    ("l", "cycle scale law (linear, quadratic, cubic)"),
    ("+ / -", "scale up / down"),
    ("] / [", "spacing up / down"),
    ("g", "toggle grid"),
    ("b", "toggle line breaks"),
    ("s", "toggle stats"),
    ("r", "reset scale, spacing and grid"),
    ("p", "paste from clipboard"),
    ("i", "edit the text (Esc to finish)"),
    (":", "command line (:law, :scale, :spacing, :grid, :breaks, :stats, :reset, :q)"),
    ("@path", "load a text, PDF or EPUB file (@@ for clipboard)"),
    ("q", "quit"),
];

const EDIT_PREFIX: &str = "EDIT ";

/// Longest suffix of `text` that fits in `max_width` columns.
fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (offset, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > max_width {
            break;
        }
        start = offset;
    }
    &text[start..]
}

fn cursor() -> Span<'static> {
    Span::styled("▏", Style::default().fg(colors::highlight()))
}

/// Bottom line: the command or text being typed, else the last status message.
pub fn status_line(state: &RenderState, width: usize) -> Line<'static> {
    match state.mode {
        AppMode::Command => {
            let input = state.command_input.clone().unwrap_or_default();
            Line::from(vec![
                Span::styled(input, Style::default().fg(colors::ink())),
                cursor(),
            ])
        }
        AppMode::Editing => {
            let line = state.edit_line.as_deref().unwrap_or_default();
            let room = width.saturating_sub(EDIT_PREFIX.len() + 1);
            Line::from(vec![
                Span::styled(
                    EDIT_PREFIX,
                    Style::default()
                        .fg(colors::highlight())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    tail_to_width(line, room).to_string(),
                    Style::default().fg(colors::ink()),
                ),
                cursor(),
            ])
        }
        _ => {
            let message = state
                .status
                .clone()
                .unwrap_or_else(|| "Press ? for help, i to type".to_string());
            Line::from(Span::styled(message, Style::default().fg(colors::muted())))
        }
    }
}

pub fn render_status_line(state: &RenderState, width: usize) -> Paragraph<'static> {
    Paragraph::new(status_line(state, width)).style(Style::default().bg(colors::canvas()))
}

pub fn render_title(state: &RenderState) -> Line<'static> {
    let source = state.source.clone().unwrap_or_else(|| "no text".to_string());
    Line::from(vec![
        Span::styled(
            " Text Bubbles ",
            Style::default()
                .fg(colors::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(source, Style::default().fg(colors::muted())),
    ])
}

pub fn render_empty_hint() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from("Press i to type, or load text with @path/to/file (@@ for the clipboard)."),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(colors::muted()).bg(colors::canvas()))
}

pub fn help_lines() -> Vec<Line<'static>> {
    HELP_LINES
        .iter()
        .map(|&(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>8}  ", key),
                    Style::default()
                        .fg(colors::highlight())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action, Style::default().fg(colors::ink())),
            ])
        })
        .collect()
}

pub fn render_help() -> Paragraph<'static> {
    Paragraph::new(help_lines())
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::muted())),
        )
        .style(Style::default().bg(colors::canvas()))
}
