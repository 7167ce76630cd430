use crate::domain::model::NeighborhoodRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("static selector is valid CSS"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("static selector is valid CSS"));

/// Text of an element with every text fragment trimmed, fragments joined
/// without separators.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Turns the rows of a neighborhood table into records.
///
/// The first row is always treated as the header and dropped. Rows with
/// fewer than two `<td>` cells are skipped; only the first two cells are
/// read (neighborhood, district) and any further columns are ignored.
pub fn parse_rows(table: ElementRef<'_>) -> Vec<NeighborhoodRecord> {
    let mut records = Vec::new();

    for (index, row) in table.select(&ROW_SELECTOR).enumerate().skip(1) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).take(2).collect();
        if cells.len() < 2 {
            tracing::trace!("Skipping row {}: fewer than two cells", index);
            continue;
        }

        let neighborhood = stripped_text(cells[0]);
        let district = stripped_text(cells[1]);

        match NeighborhoodRecord::from_cells(&neighborhood, &district) {
            Some(record) => records.push(record),
            None => tracing::trace!(
                "Skipping row {}: '{}' / '{}' is empty or a header",
                index,
                neighborhood,
                district
            ),
        }
    }

    records
}
