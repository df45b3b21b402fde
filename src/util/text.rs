/// Joins items as a quoted, human-readable list.
///
/// Every item is wrapped in single quotes. All but the last are separated by
/// `", "`, and the last is attached with the word given in `last`.
///
/// ## Example
/// ```
/// use brisk::util::text::join_quoted;
///
/// assert_eq!(join_quoted(&[";"], "or"), "';'");
/// assert_eq!(join_quoted(&["integer", "identifier"], "or"), "'integer' or 'identifier'");
/// assert_eq!(join_quoted(&["a", "b", "c"], "and"), "'a', 'b' and 'c'");
/// ```
#[must_use]
pub fn join_quoted(items: &[&str], last: &str) -> String {
    match items {
        [] => String::new(),
        [only] => format!("'{only}'"),
        [init @ .., tail] => {
            let head = init.iter()
                           .map(|item| format!("'{item}'"))
                           .collect::<Vec<_>>()
                           .join(", ");
            format!("{head} {last} '{tail}'")
        },
    }
}
