//! Output formatting for converted message lines.

/// Drop whitespace from `message` and split the rest into groups of five
/// separated by single spaces. The last group may be shorter.
pub fn group_in_fives(message: &str) -> String {
    let symbols: Vec<char> = message.chars().filter(|c| !c.is_whitespace()).collect();
    symbols
        .chunks(5)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
