//! Answer text to bullet rows.

/// Splits an answer into displayable bullet rows.
///
/// Lines that are blank after trimming are skipped. Each remaining line
/// loses one leading `•` or `-` marker (plus following whitespace); the
/// view prepends its own bullet glyph.
pub fn answer_rows(answer: &str) -> Vec<String> {
    answer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix('•')
                .or_else(|| line.strip_prefix('-'))
                .map(str::trim_start)
                .unwrap_or(line)
                .to_string()
        })
        .collect()
}
