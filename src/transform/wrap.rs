//! Word wrapping for namelist description text.

/// Column the wrapped text must stay within.
pub const WRAP_WIDTH: usize = 80;

/// Leading spaces on every wrapped line.
pub const WRAP_INDENT: usize = 6;

/// Wrap `text` to [`WRAP_WIDTH`] columns with [`WRAP_INDENT`] spaces of
/// leading indent on every line.
///
/// Lines break only at whitespace, so a word and its sentence punctuation
/// are never split; a word longer than the width overflows its line intact.
/// Whitespace runs between words on the same line are kept exactly as
/// authored; the run at a break point is consumed by the break. An empty or
/// all-whitespace input yields an empty string.
pub fn fill(text: &str) -> String {
    fill_width(text, WRAP_WIDTH, WRAP_INDENT)
}

fn fill_width(text: &str, width: usize, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for (gap, word) in tokens(text) {
        if line.is_empty() {
            line.push_str(&pad);
            line.push_str(word);
        } else if line.chars().count() + gap.chars().count() + word.chars().count() <= width {
            line.push_str(gap);
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(&pad);
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// Split into (preceding-whitespace, word) pairs. Leading whitespace of the
/// whole text is attached to the first word and dropped by the filler.
fn tokens(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let ws_end = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (gap, after) = rest.split_at(ws_end);
        if after.is_empty() {
            break;
        }
        let word_end = after.find(char::is_whitespace).unwrap_or(after.len());
        let (word, tail) = after.split_at(word_end);
        out.push((gap, word));
        rest = tail;
    }
    out
}
