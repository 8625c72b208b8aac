// src/tables.rs

use scraper::{ElementRef, Html, Selector};

/// One HTML `<table>` element as an ordered grid of text cells.
///
/// No fixed row or column count: the grid is whatever the page carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Each `<tr>`, as a Vec of cell strings (one per `<th>`/`<td>`).
    pub rows: Vec<Vec<String>>,
}

/// Parse every `<table>` element out of `html`, in document order.
///
/// Domain-blind: all knowledge of what the tables mean lives in `process`.
/// Cell text is the concatenation of the cell's text nodes with
/// outer whitespace trimmed; whitespace inside the cell survives untouched
/// (downstream parsing splits on runs of spaces inside one cell).
pub fn extract_tables(html: &str) -> Vec<RawTable> {
    let table_sel = Selector::parse("table").expect("static table selector should be valid");
    let row_sel = Selector::parse("tr").expect("static row selector should be valid");
    let cell_sel = Selector::parse("th, td").expect("static cell selector should be valid");

    let doc = Html::parse_document(html);
    doc.select(&table_sel)
        .map(|table| RawTable {
            rows: table
                .select(&row_sel)
                .map(|row| row.select(&cell_sel).map(cell_text).collect())
                .collect(),
        })
        .collect()
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
