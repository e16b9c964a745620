//! Common types and data structures

use serde::Deserialize;

/// Dataset document as shipped in `assets/periodic_table.json`
#[derive(Debug, Deserialize)]
pub struct ElementDataset {
    pub elements: Vec<ElementRecord>,
}

/// One chemical element. Coordinates missing from the source default to 0,
/// which is never a valid grid position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementRecord {
    pub name: String,
    pub number: u32,
    pub symbol: String,
    pub category: String,
    #[serde(default)]
    pub xpos: i32,
    #[serde(default)]
    pub ypos: i32,
    #[serde(default)]
    pub wxpos: i32,
    #[serde(default)]
    pub wypos: i32,
    #[serde(default)]
    pub group: i32,
    #[serde(default)]
    pub period: i32,
}

impl ElementRecord {
    /// (period, group)
    pub fn periodic_position(&self) -> (i32, i32) {
        (self.period, self.group)
    }

    /// (ypos, xpos)
    pub fn table_position(&self) -> (i32, i32) {
        (self.ypos, self.xpos)
    }

    /// (wypos, wxpos), the wide 32-column layout
    pub fn wide_position(&self) -> (i32, i32) {
        (self.wypos, self.wxpos)
    }

    pub fn is_lanthanide(&self) -> bool {
        self.category.to_lowercase().contains("lanthanide")
    }

    pub fn is_actinide(&self) -> bool {
        self.category.to_lowercase().contains("actinide")
    }
}

/// Which footnote row a series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Lanthanide,
    Actinide,
}

#[cfg(test)]
pub(crate) fn element(number: u32, symbol: &str, category: &str) -> ElementRecord {
    ElementRecord {
        name: symbol.to_string(),
        number,
        symbol: symbol.to_string(),
        category: category.to_string(),
        xpos: 0,
        ypos: 0,
        wxpos: 0,
        wypos: 0,
        group: 0,
        period: 0,
    }
}
