/// Titles that mark a men's major. Matching is a pure table lookup so
/// schedule filtering never needs a network call.
const MAJOR_TITLES: [&str; 4] = [
    "masters tournament",
    "pga championship",
    "u.s. open",
    "the open championship",
];

#[must_use]
pub fn is_major(title: &str) -> bool {
    let lowered = title.to_lowercase();
    MAJOR_TITLES.iter().any(|major| lowered.contains(major))
}
