use super::{LoadError, LoadedDocument};
use epub::doc::EpubDoc;
use std::path::Path;

/// Tags that end a visual line; they become `\n` so bubbles break where the book does.
const BLOCK_TAGS: &[&str] = &["p", "br", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Loads every spine chapter as plain text, separated by a blank line.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let file = Path::new(path);
    if !file.is_file() {
        return Err(LoadError::FileNotFound(file.to_path_buf()));
    }

    let mut doc = EpubDoc::new(file).map_err(|err| LoadError::EpubParse(err.to_string()))?;
    let chapters = doc.get_num_chapters();
    if chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut pieces = Vec::with_capacity(chapters);
    for index in 0..chapters {
        if !doc.set_current_chapter(index) {
            tracing::warn!(chapter = index, "skipping unreadable epub chapter");
            continue;
        }
        if let Some((html, _mime)) = doc.get_current_str() {
            let text = html_to_text(&html);
            if !text.is_empty() {
                pieces.push(text);
            }
        }
    }

    if pieces.is_empty() {
        return Err(LoadError::EmptyFile(path.to_string()));
    }
    tracing::debug!(chapters, kept = pieces.len(), "extracted epub text");

    Ok(LoadedDocument {
        text: pieces.join("\n\n"),
        source: format!("epub:{}", file.display()),
    })
}

/// Strips markup from a chapter. Block-level tags become line breaks and the
/// common named entities are decoded; blank lines are dropped.
fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        push_decoded(&mut out, &rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            rest = "";
            break;
        };
        let tag = &rest[open + 1..open + close];
        if is_block_tag(tag) {
            out.push('\n');
        }
        rest = &rest[open + close + 1..];
    }
    push_decoded(&mut out, rest);

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_tag(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("");
    BLOCK_TAGS.iter().any(|block| block.eq_ignore_ascii_case(name))
}

fn push_decoded(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        match after.find(';').and_then(|end| decode_entity(&after[1..end]).map(|c| (c, end))) {
            Some((decoded, end)) => {
                out.push(decoded);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "rsquo" => Some('’'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
