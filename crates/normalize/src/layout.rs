use crate::config::GridLayout;

/// Auto-layout position of the `index`-th sibling.
///
/// ```
/// use normalize::{grid_position, GridLayout};
///
/// let grid = GridLayout::default();
/// assert_eq!(grid_position(0, &grid), (50.0, 50.0));
/// assert_eq!(grid_position(4, &grid), (170.0, 130.0));
/// ```
pub fn grid_position(index: usize, grid: &GridLayout) -> (f64, f64) {
    let columns = grid.columns.max(1);
    let col = (index % columns) as f64;
    let row = (index / columns) as f64;
    (
        grid.origin_x + col * grid.column_step,
        grid.origin_y + row * grid.row_step,
    )
}

/// URL slug for a page name: trimmed, lowercased, whitespace runs collapsed
/// to a single `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Default page path for `name`.
pub(crate) fn page_path(name: &str) -> String {
    format!("/{}", slugify(name))
}
