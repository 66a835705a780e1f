//! Line-level markup of canned reply bodies.
//!
//! Bodies are plain text with a few conventions. Front-ends call
//! `classify_body` to decide how to style each line without parsing markdown.

/// The emoji that open a callout line.
const CALLOUT_PREFIXES: [&str; 5] = ["⚠️", "🚨", "🏥", "🩺", "📱"];

/// How one line of a reply body should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `**Heading**` with the markers stripped.
    Heading(&'a str),
    /// A line starting with `•`, kept verbatim.
    Bullet(&'a str),
    /// A line opening with one of the callout emoji.
    Callout(&'a str),
    /// A line opening with `✅`.
    Success(&'a str),
    Text(&'a str),
    Blank,
}

/// Classify a single line.
///
/// A heading must both start and end with `**`; a line like
/// `**Dosage:** 200-400mg` is plain text that merely contains bold markers.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return LineKind::Heading(&line[2..line.len() - 2]);
    }
    if line.starts_with('•') {
        return LineKind::Bullet(line);
    }
    if CALLOUT_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return LineKind::Callout(line);
    }
    if line.starts_with('✅') {
        return LineKind::Success(line);
    }
    LineKind::Text(line)
}

/// Classify every line of `body`, splitting on `\n`.
pub fn classify_body(body: &str) -> Vec<LineKind<'_>> {
    body.split('\n').map(classify_line).collect()
}

/// Remove `**` bold markers, for front-ends that cannot render bold inline.
pub fn strip_bold(line: &str) -> String {
    line.replace("**", "")
}
