use std::fmt::Display;

use regex::Regex;

/// Collapses whitespace and numbers positional placeholders (`?` becomes
/// `?1`, `?2`, ...) so multi-line SQL literals log on one line and bind
/// order is explicit.
pub fn sql(query: &str) -> String {
    let cleaned = query.split_whitespace().collect::<Vec<&str>>().join(" ");
    let re = Regex::new(r"\?").expect("static placeholder pattern");
    let mut param_index = 0;
    re.replace_all(&cleaned, |_: &regex::Captures| {
        param_index += 1;
        format!("?{}", param_index)
    })
    .into_owned()
}

/// Maps every item, logging and dropping the ones that fail instead of
/// failing the whole batch.
pub fn best_effort<I, T, E, F>(items: I, what: &str, mut map: F) -> Vec<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, E>,
    E: Display,
{
    items
        .into_iter()
        .filter_map(|item| match map(item) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Skipping {} row that could not be formatted: {}", what, e);
                None
            }
        })
        .collect()
}
