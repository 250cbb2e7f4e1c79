//! Heading-delimited section extraction for memory files

/// Remove `<!-- ... -->` comments, including multi-line ones.
/// An unterminated comment runs to the end of the text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn is_top_level_heading(line: &str) -> bool {
    matches!(line, "#" | "##") || line.starts_with("# ") || line.starts_with("## ")
}

fn heading_name(line: &str) -> Option<&str> {
    line.strip_prefix("## ").map(str::trim)
}

/// Body of the `## <heading>` section: every line after the heading up to the
/// next `#`/`##` heading or end of text. `None` when the heading is missing.
pub fn extract_section<'a>(text: &'a str, heading: &str) -> Option<Vec<&'a str>> {
    let mut lines = text.lines();
    lines.find(|line| heading_name(line.trim_end()) == Some(heading))?;
    Some(
        lines
            .take_while(|line| !is_top_level_heading(line.trim_end()))
            .collect(),
    )
}

/// Top-level `- ` bullets only, trimmed. Nested bullets are dropped.
pub fn bullet_lines<'a>(body: &[&'a str]) -> Vec<&'a str> {
    body.iter()
        .filter(|line| line.starts_with("- "))
        .map(|line| line.trim())
        .collect()
}

/// Trailing whitespace removed, leading and trailing blank lines dropped.
pub fn tidy_lines<'a>(body: &[&'a str]) -> Vec<&'a str> {
    let lines: Vec<&str> = body.iter().map(|l| l.trim_end()).collect();
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}
