//! Recovers the argument string to forward from the raw command line.

/// Removes `prefix` from the start of `s` at most once, ignoring case.
///
/// A string that doesn't start with `prefix` comes back unchanged, and `None`
/// stays `None`.
pub fn trim_start<'a>(s: Option<&'a str>, prefix: &str) -> Option<&'a str> {
    let s = s?;
    Some(strip_prefix_ignore_case(s, prefix).unwrap_or(s))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    for expected in prefix.chars() {
        let (_, c) = chars.next()?;
        if c != expected && !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = chars.next().map_or(s.len(), |(i, _)| i);
    Some(&s[end..])
}

/// The ways this program may appear at the head of its own command line,
/// most specific first.
pub fn self_references() -> Vec<String> {
    let mut refs = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        let exe = exe.display().to_string();
        refs.push(format!("\"{}\"", exe));
        refs.push(exe);
    }
    if let Some(arg0) = std::env::args_os().next().and_then(|a| a.into_string().ok()) {
        refs.push(format!("\"{}\"", arg0));
        refs.push(arg0);
    }
    refs
}

/// Strips the first matching self reference and the whitespace after it.
///
/// A reference only counts when it is followed by whitespace or the end of the
/// line, so `cmdwt` never eats into `cmdwt2`. With no match the whole line is
/// forwarded.
pub fn forwarded_args<'a, S: AsRef<str>>(raw: Option<&'a str>, self_refs: &[S]) -> Option<&'a str> {
    let raw = raw?;
    let rest = self_refs
        .iter()
        .filter_map(|r| trim_start(Some(raw), r.as_ref()).filter(|rest| rest.len() < raw.len()))
        .find(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .unwrap_or(raw);
    Some(rest.trim_start())
}
