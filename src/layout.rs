//! Element placement: main 7x18 grid plus the lanthanide/actinide rows

use crate::constants::{ACTINIUM, GRID_COLS, GRID_ROWS, LANTHANUM};
use crate::types::{ElementRecord, Series};
use tracing::debug;

/// Coordinate conventions tried in order; the first in-bounds pair wins.
const PLACEMENT_ORDER: [fn(&ElementRecord) -> (i32, i32); 3] = [
    ElementRecord::periodic_position,
    ElementRecord::table_position,
    ElementRecord::wide_position,
];

/// Periods x groups, 0-indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct MainGrid<'a> {
    cells: [[Option<&'a ElementRecord>; GRID_COLS]; GRID_ROWS],
}

impl<'a> MainGrid<'a> {
    fn new() -> Self {
        Self {
            cells: [[None; GRID_COLS]; GRID_ROWS],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&'a ElementRecord> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<&'a ElementRecord>; GRID_COLS]> {
        self.cells.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = Option<&'a ElementRecord>> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn occupied(&self) -> impl Iterator<Item = &'a ElementRecord> + '_ {
        self.cells().flatten()
    }

    /// Lowest atomic number wins a contested cell.
    fn place(&mut self, row: usize, col: usize, element: &'a ElementRecord) {
        let cell = &mut self.cells[row][col];
        if cell.map_or(true, |existing| element.number < existing.number) {
            *cell = Some(element);
        }
    }
}

/// Resolver output
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout<'a> {
    pub main: MainGrid<'a>,
    pub lanthanides: Vec<&'a ElementRecord>,
    pub actinides: Vec<&'a ElementRecord>,
}

impl<'a> TableLayout<'a> {
    pub fn series(&self, series: Series) -> &[&'a ElementRecord] {
        match series {
            Series::Lanthanide => &self.lanthanides,
            Series::Actinide => &self.actinides,
        }
    }

    pub fn placed_count(&self) -> usize {
        self.main.occupied().count() + self.lanthanides.len() + self.actinides.len()
    }
}

/// Converts a 1-indexed (row, col) pair to grid indices when in bounds.
fn grid_index((row, col): (i32, i32)) -> Option<(usize, usize)> {
    let in_rows = (1..=GRID_ROWS as i32).contains(&row);
    let in_cols = (1..=GRID_COLS as i32).contains(&col);
    (in_rows && in_cols).then(|| ((row - 1) as usize, (col - 1) as usize))
}

/// Lay out the dataset. Never fails: elements without a usable position are
/// left out of the grid.
pub fn resolve(elements: &[ElementRecord]) -> TableLayout<'_> {
    let mut main = MainGrid::new();
    let mut lanthanides = Vec::new();
    let mut actinides = Vec::new();

    for element in elements {
        let is_anchor = element.number == LANTHANUM || element.number == ACTINIUM;

        if element.is_lanthanide() && element.number != LANTHANUM {
            lanthanides.push(element);
            continue;
        }
        if element.is_actinide() && element.number != ACTINIUM {
            actinides.push(element);
            continue;
        }

        if is_anchor {
            if let Some((row, col)) = grid_index(element.wide_position()) {
                main.cells[row][col] = Some(element);
            }
            continue;
        }

        match PLACEMENT_ORDER
            .iter()
            .find_map(|position| grid_index(position(element)))
        {
            Some((row, col)) => main.place(row, col, element),
            None => debug!(number = element.number, symbol = %element.symbol, "Element has no grid position"),
        }
    }

    lanthanides.sort_by_key(|e| e.number);
    actinides.sort_by_key(|e| e.number);

    TableLayout {
        main,
        lanthanides,
        actinides,
    }
}

/// Holds the last resolved layout and recomputes only when handed a
/// different dataset slice.
pub struct LayoutCache<'a> {
    source: &'a [ElementRecord],
    layout: TableLayout<'a>,
}

impl<'a> LayoutCache<'a> {
    pub fn new(elements: &'a [ElementRecord]) -> Self {
        Self {
            source: elements,
            layout: resolve(elements),
        }
    }

    pub fn get(&mut self, elements: &'a [ElementRecord]) -> &TableLayout<'a> {
        if !std::ptr::eq(self.source, elements) {
            debug!(count = elements.len(), "Dataset changed, resolving layout");
            self.source = elements;
            self.layout = resolve(elements);
        }
        &self.layout
    }

    pub fn layout(&self) -> &TableLayout<'a> {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::types::element;
    use std::collections::HashSet;

    fn at(number: u32, symbol: &str, category: &str, period: i32, group: i32) -> ElementRecord {
        ElementRecord {
            period,
            group,
            ..element(number, symbol, category)
        }
    }

    fn numbers(series: &[&ElementRecord]) -> Vec<u32> {
        series.iter().map(|e| e.number).collect()
    }

    #[test]
    fn hydrogen_lands_top_left() {
        let elements = vec![at(1, "H", "diatomic nonmetal", 1, 1)];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(0, 0).map(|e| e.symbol.as_str()), Some("H"));
    }

    #[test]
    fn grid_always_has_126_cells() {
        let empty = resolve(&[]);
        assert_eq!(empty.main.cells().count(), GRID_ROWS * GRID_COLS);
        assert_eq!(empty.main.cells().count(), 126);

        let elements = dataset::load_embedded().unwrap();
        assert_eq!(resolve(&elements).main.cells().count(), 126);
    }

    #[test]
    fn falls_back_to_table_position() {
        let mut li = at(3, "Li", "alkali metal", 0, 0);
        li.ypos = 2;
        li.xpos = 3;
        let elements = vec![li];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(1, 2).map(|e| e.number), Some(3));
    }

    #[test]
    fn falls_back_to_wide_position_last() {
        let mut x = at(20, "Ca", "alkaline earth metal", 8, 2);
        x.ypos = 0;
        x.xpos = 19;
        x.wypos = 4;
        x.wxpos = 2;
        let elements = vec![x];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(3, 1).map(|e| e.number), Some(20));
    }

    #[test]
    fn unplaceable_element_is_dropped() {
        let mut ghost = at(119, "Uue", "unknown", 8, 1);
        ghost.ypos = -1;
        ghost.xpos = 40;
        ghost.wypos = 0;
        ghost.wxpos = 0;
        let elements = vec![ghost];
        let layout = resolve(&elements);
        assert_eq!(layout.main.occupied().count(), 0);
        assert!(layout.lanthanides.is_empty());
        assert!(layout.actinides.is_empty());
    }

    #[test]
    fn collision_keeps_lowest_number() {
        let elements = vec![at(5, "B", "metalloid", 1, 1), at(3, "Li", "alkali metal", 1, 1)];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(0, 0).map(|e| e.number), Some(3));

        let reversed = vec![at(3, "Li", "alkali metal", 1, 1), at(5, "B", "metalloid", 1, 1)];
        let layout = resolve(&reversed);
        assert_eq!(layout.main.get(0, 0).map(|e| e.number), Some(3));
    }

    #[test]
    fn anchors_use_wide_position_only() {
        let mut la = at(57, "La", "lanthanide", 6, 3);
        la.wypos = 6;
        la.wxpos = 3;
        // Out-of-range wide position: anchor skipped even with a valid period/group
        let mut ac = at(89, "Ac", "actinide", 7, 3);
        ac.wypos = 7;
        ac.wxpos = 3 + 14 * 2;
        let elements = vec![la, ac];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(5, 2).map(|e| e.number), Some(57));
        assert_eq!(layout.main.get(6, 2), None);
        assert!(layout.lanthanides.is_empty());
        assert!(layout.actinides.is_empty());
    }

    #[test]
    fn anchor_overwrites_without_tie_break() {
        let mut la = at(57, "La", "lanthanide", 0, 0);
        la.wypos = 1;
        la.wxpos = 1;
        let elements = vec![at(1, "H", "diatomic nonmetal", 1, 1), la];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(0, 0).map(|e| e.number), Some(57));
    }

    #[test]
    fn series_sorted_ascending() {
        let elements = vec![
            at(60, "Nd", "lanthanide", 6, 3),
            at(92, "U", "actinide", 7, 3),
            at(58, "Ce", "Lanthanide", 6, 3),
            at(90, "Th", "actinide", 7, 3),
            at(59, "Pr", "lanthanide", 6, 3),
        ];
        let layout = resolve(&elements);
        assert_eq!(numbers(&layout.lanthanides), vec![58, 59, 60]);
        assert_eq!(numbers(&layout.actinides), vec![90, 92]);
        assert_eq!(numbers(layout.series(Series::Actinide)), vec![90, 92]);
        assert_eq!(layout.main.occupied().count(), 0);
    }

    #[test]
    fn embedded_dataset_layout() {
        let elements = dataset::load_embedded().unwrap();
        let layout = resolve(&elements);

        assert_eq!(layout.main.get(5, 2).map(|e| e.symbol.as_str()), Some("La"));
        assert_eq!(layout.main.get(6, 2).map(|e| e.symbol.as_str()), Some("Ac"));
        assert_eq!(layout.main.get(0, 17).map(|e| e.symbol.as_str()), Some("He"));
        assert_eq!(layout.main.get(3, 7).map(|e| e.symbol.as_str()), Some("Fe"));
        assert_eq!(layout.main.get(6, 17).map(|e| e.symbol.as_str()), Some("Og"));
        assert_eq!(layout.main.get(0, 1), None);

        assert_eq!(numbers(&layout.lanthanides), (58..=71).collect::<Vec<_>>());
        assert_eq!(numbers(&layout.actinides), (90..=103).collect::<Vec<_>>());

        // 119 has no in-range position under any convention
        assert!(layout.main.occupied().all(|e| e.number != 119));
        assert_eq!(layout.placed_count(), 118);
    }

    #[test]
    fn no_number_appears_twice() {
        let elements = dataset::load_embedded().unwrap();
        let layout = resolve(&elements);
        let mut seen = HashSet::new();
        for e in layout
            .main
            .occupied()
            .chain(layout.lanthanides.iter().copied())
            .chain(layout.actinides.iter().copied())
        {
            assert!(seen.insert(e.number), "duplicate {}", e.number);
        }
    }

    #[test]
    fn malformed_duplicates_do_not_panic() {
        let elements = vec![
            at(6, "C", "polyatomic nonmetal", 2, 14),
            at(6, "C", "polyatomic nonmetal", 2, 14),
            at(58, "Ce", "lanthanide", 6, 3),
            at(58, "Ce", "lanthanide", 6, 3),
        ];
        let layout = resolve(&elements);
        assert_eq!(layout.main.get(1, 13).map(|e| e.number), Some(6));
        assert_eq!(numbers(&layout.lanthanides), vec![58, 58]);
    }

    #[test]
    fn cache_resolves_once_per_dataset() {
        let first = vec![at(1, "H", "diatomic nonmetal", 1, 1)];
        let second = vec![at(2, "He", "noble gas", 1, 18)];

        let mut cache = LayoutCache::new(&first);
        let before = cache.get(&first).main.get(0, 0).map(|e| e as *const ElementRecord);
        let again = cache.get(&first).main.get(0, 0).map(|e| e as *const ElementRecord);
        assert_eq!(before, again);

        let layout = cache.get(&second);
        assert_eq!(layout.main.get(0, 0), None);
        assert_eq!(layout.main.get(0, 17).map(|e| e.number), Some(2));
        assert_eq!(cache.layout().main.occupied().count(), 1);
    }
}
