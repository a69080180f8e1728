//! Document segmentation.
//!
//! Splits a document into lines or sentences and units into word tokens.
//! Units carry byte offsets into the original text; segmentation never
//! copies or mutates the document, so downstream spans stay
//! offset-correct.

/// One segmentation unit (a line or a sentence), as a byte range into
/// the original document. Trailing line terminators are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub start: usize,
    pub end: usize,
}

impl Unit {
    pub fn text<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}

/// Tokens ending a sentence only when followed by whitespace.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Common abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: [&str; 14] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "no", "co",
];

/// Split into lines. The trailing `\n` (or `\r\n`) is not part of the
/// unit.
pub fn lines(doc: &str) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut offset = 0;
    for raw in doc.split_inclusive('\n') {
        let mut end = offset + raw.len();
        if raw.ends_with('\n') {
            end -= 1;
            if raw.ends_with("\r\n") {
                end -= 1;
            }
        }
        units.push(Unit { start: offset, end });
        offset += raw.len();
    }
    units
}

/// Split into sentences. Sentences never cross line boundaries; each
/// line is segmented independently.
pub fn sentences(doc: &str) -> Vec<Unit> {
    let mut units = Vec::new();
    for line in lines(doc) {
        sentences_in_line(doc, line, &mut units);
    }
    units
}

fn sentences_in_line(doc: &str, line: Unit, out: &mut Vec<Unit>) {
    let text = line.text(doc);
    let base = line.start;

    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if start.is_none() {
            if ch.is_whitespace() {
                continue;
            }
            start = Some(i);
        }
        if !TERMINATORS.contains(&ch) {
            continue;
        }
        if ch == '.' && is_abbreviation(text, i) {
            continue;
        }
        // consume runs of terminators and closing quotes/brackets
        let mut end = i + ch.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if TERMINATORS.contains(&next) || matches!(next, '"' | '\'' | ')' | ']') {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let at_boundary = match chars.peek() {
            Some(&(_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            if let Some(s) = start.take() {
                out.push(Unit {
                    start: base + s,
                    end: base + end,
                });
            }
        }
    }

    if let Some(s) = start {
        let trailing = text[s..].trim_end();
        if !trailing.is_empty() {
            out.push(Unit {
                start: base + s,
                end: base + s + trailing.len(),
            });
        }
    }
}

/// True when the period at byte `dot` follows a known abbreviation or a
/// single-letter initial.
fn is_abbreviation(text: &str, dot: usize) -> bool {
    let word: String = text[..dot]
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if word.is_empty() {
        return false;
    }
    if word.len() == 1 && word.chars().next().is_some_and(|c| c.is_uppercase()) {
        return true;
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Word tokens of a unit: maximal runs of alphanumerics and internal
/// apostrophes.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .collect()
}
