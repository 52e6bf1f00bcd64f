/// Line break used in display text (the plot tooltip renders `\n`).
pub const LINE_BREAK: &str = "\n";

/// Reformat the raw `;`-delimited setlist cell for display.
///
/// Every `;` becomes `,` plus a line break; afterwards a `:` directly followed
/// by that `,`+break collapses to `:`+break. The second pass depends on the
/// output of the first.
pub fn format_setlist(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let split = raw.replace(';', &format!(",{LINE_BREAK}"));
    split.replace(&format!(":,{LINE_BREAK}"), &format!(":{LINE_BREAK}"))
}
