//! Category classification for tile colors

use crate::types::ElementRecord;

/// Color token for a tile. Resolved to a concrete color in `theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryColor {
    /// No element in the cell
    Empty,
    DiatomicNonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    PolyatomicNonmetal,
    PostTransitionMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    /// Category text matched nothing
    Unclassified,
}

// Order matters: "post-transition metal" also contains "transition metal".
const PATTERNS: [(&str, CategoryColor); 10] = [
    ("diatomic nonmetal", CategoryColor::DiatomicNonmetal),
    ("noble gas", CategoryColor::NobleGas),
    ("alkali metal", CategoryColor::AlkaliMetal),
    ("alkaline earth metal", CategoryColor::AlkalineEarthMetal),
    ("metalloid", CategoryColor::Metalloid),
    ("polyatomic nonmetal", CategoryColor::PolyatomicNonmetal),
    ("post-transition metal", CategoryColor::PostTransitionMetal),
    ("transition metal", CategoryColor::TransitionMetal),
    ("lanthanide", CategoryColor::Lanthanide),
    ("actinide", CategoryColor::Actinide),
];

pub fn classify(element: Option<&ElementRecord>) -> CategoryColor {
    let Some(element) = element else {
        return CategoryColor::Empty;
    };
    classify_category(&element.category)
}

/// Case-insensitive substring match against the ordered pattern list
pub fn classify_category(category: &str) -> CategoryColor {
    let category = category.to_lowercase();
    PATTERNS
        .iter()
        .find(|(pattern, _)| category.contains(*pattern))
        .map(|&(_, color)| color)
        .unwrap_or(CategoryColor::Unclassified)
}
