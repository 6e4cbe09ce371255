//! Tolerant skill matching shared by every scorer.
//!
//! A requirement is satisfied when any extracted item contains it as a
//! case-insensitive substring: "React" matches "React.js", and "Java" matches
//! "JavaScript".

/// True if any of `have` contains `wanted`, ignoring case.
pub fn contains_ci(have: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    have.iter().any(|h| h.to_lowercase().contains(&wanted))
}

/// Requirements from `wanted` that are satisfied by `have`, in `wanted` order.
pub fn matched<'a>(have: &[String], wanted: &'a [String]) -> Vec<&'a str> {
    wanted
        .iter()
        .filter(|w| contains_ci(have, w))
        .map(String::as_str)
        .collect()
}

/// Requirements from `wanted` not satisfied by `have`, in `wanted` order.
pub fn missing<'a>(have: &[String], wanted: &'a [String]) -> Vec<&'a str> {
    wanted
        .iter()
        .filter(|w| !contains_ci(have, w))
        .map(String::as_str)
        .collect()
}

/// Exact membership test used by the category-based employee narratives.
pub fn any_exact(have: &[String], category: &[&str]) -> bool {
    have.iter().any(|h| category.contains(&h.as_str()))
}

/// Items of `have` that belong to `category`, in `have` order.
pub fn exact_members<'a>(have: &'a [String], category: &[&str]) -> Vec<&'a str> {
    have.iter()
        .filter(|h| category.contains(&h.as_str()))
        .map(String::as_str)
        .collect()
}
