//! Type-label to badge-color lookup.
//!
//! Colors are Tailwind background utility classes. Labels outside the table
//! have no color; there is no fallback.

/// Badge color for each of the eighteen known type labels.
pub const TYPE_COLORS: [(&str, &str); 18] = [
    ("fire", "bg-red-500"),
    ("water", "bg-blue-500"),
    ("grass", "bg-green-500"),
    ("electric", "bg-yellow-400"),
    ("psychic", "bg-pink-500"),
    ("ice", "bg-cyan-400"),
    ("dragon", "bg-purple-700"),
    ("dark", "bg-gray-700"),
    ("fairy", "bg-pink-300"),
    ("normal", "bg-gray-400"),
    ("fighting", "bg-red-700"),
    ("flying", "bg-indigo-400"),
    ("poison", "bg-purple-500"),
    ("ground", "bg-yellow-600"),
    ("rock", "bg-yellow-800"),
    ("bug", "bg-green-700"),
    ("ghost", "bg-indigo-700"),
    ("steel", "bg-gray-500"),
];

/// Returns the badge color class for a type label.
///
/// Matching is exact and case-sensitive.
pub fn type_color(label: &str) -> Option<&'static str> {
    TYPE_COLORS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, color)| *color)
}
