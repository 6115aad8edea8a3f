use crate::engine::{Config, Stats};
use crate::ui::theme::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Cuts `text` to at most `max_width` terminal columns, never splitting a grapheme.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// `[n] word` for the longest word, or `-` when there is none.
pub fn longest_label(stats: &Stats, max_width: usize) -> String {
    match &stats.longest_word {
        Some(token) => {
            let label = format!("[{}] {}", token.alpha_num_length, token.label());
            truncate_to_width(&label, max_width)
        }
        None => "-".to_string(),
    }
}

fn stat_span(name: &'static str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(name, Style::default().fg(colors::muted())),
        Span::styled(
            value,
            Style::default()
                .fg(colors::ink())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ]
}

pub fn stats_lines(stats: &Stats, config: &Config, width: usize) -> Vec<Line<'static>> {
    let mut counts = Vec::new();
    counts.extend(stat_span("Tokens ", stats.token_count.to_string()));
    counts.extend(stat_span("Words ", stats.word_count.to_string()));
    counts.extend(stat_span("Chars ", stats.char_count.to_string()));
    counts.extend(stat_span("Alphanumerics ", stats.alpha_num_count.to_string()));
    counts.extend(stat_span("Letters ", stats.letter_count.to_string()));
    counts.extend(stat_span(
        "Avg length ",
        format!("{:.1}", stats.average_word_length),
    ));

    let mut settings = Vec::new();
    settings.extend(stat_span("Law ", config.size.law.to_string()));
    settings.extend(stat_span("Scale ", format!("{:.1}", config.size.scale)));
    settings.extend(stat_span("Spacing ", format!("{:.1}", config.size.spacing)));
    settings.extend(stat_span(
        "Grid ",
        (if config.display.gridded { "on" } else { "off" }).to_string(),
    ));

    let prefix = "Longest ";
    let longest = longest_label(stats, width.saturating_sub(prefix.len()));

    vec![
        Line::from(counts),
        Line::from(stat_span(prefix, longest)),
        Line::from(settings),
    ]
}

pub fn render_stats_panel(stats: &Stats, config: &Config, width: usize) -> Paragraph<'static> {
    Paragraph::new(stats_lines(stats, config, width.saturating_sub(2)))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::muted())),
        )
        .style(Style::default().bg(colors::canvas()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{accumulate, tokenize};

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("extraordinarily", 6), "extra…");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // each CJK character is two columns wide
        assert_eq!(truncate_to_width("漢字漢字", 5), "漢字…");
    }

    #[test]
    fn test_truncate_keeps_combining_marks_together() {
        let text = "e\u{301}e\u{301}e\u{301}e\u{301}";
        let cut = truncate_to_width(text, 3);
        assert_eq!(cut, "e\u{301}e\u{301}…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_longest_label() {
        let stats = accumulate(&tokenize("a quick brown fox"));
        assert_eq!(longest_label(&stats, 40), "[5] quick");
    }

    #[test]
    fn test_longest_label_none() {
        assert_eq!(longest_label(&Stats::default(), 40), "-");
    }

    #[test]
    fn test_stats_lines_count() {
        let stats = accumulate(&tokenize("Hello, world! 2024"));
        let lines = stats_lines(&stats, &Config::default(), 80);
        assert_eq!(lines.len(), 3);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("Tokens 5  Words 2  "));
        assert!(first.contains("Avg length 2.8"));
    }
}
