//! Autocomplete Module
//!
//! Prefix completion against a field's list of choices.

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn starts_with_ignore_case(candidate: &str, typed: &str) -> bool {
    let mut candidate = candidate.chars();
    typed
        .chars()
        .all(|t| candidate.next().map_or(false, |c| chars_eq_ignore_case(c, t)))
}

/// Suggest a completion for `typed` from `candidates`.
///
/// A candidate qualifies when it is longer than `typed` and starts with it,
/// ignoring case. With one qualifying candidate the suggestion is that
/// candidate; with several it is their longest common prefix, which can be
/// no longer than `typed` when the candidates diverge right away.
pub fn suggest<S: AsRef<str>>(typed: &str, candidates: &[S]) -> Option<String> {
    let typed_len = typed.chars().count();
    let mut matches = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| c.chars().count() > typed_len && starts_with_ignore_case(c, typed));

    let first = matches.next()?;
    let mut common = first.chars().count();
    for other in matches {
        common = first
            .chars()
            .zip(other.chars())
            .take(common)
            .take_while(|(a, b)| chars_eq_ignore_case(*a, *b))
            .count();
    }
    Some(first.chars().take(common).collect())
}
