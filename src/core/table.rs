use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("static selector is valid CSS"));

/// Strategy for picking the data table out of a parsed page.
pub trait TableLocator: Send + Sync {
    fn locate<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>>;

    /// Short description used in logs and errors.
    fn describe(&self) -> String;
}

/// The first `<table>` in document order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstTable;

impl TableLocator for FirstTable {
    fn locate<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&TABLE_SELECTOR).next()
    }

    fn describe(&self) -> String {
        "first <table>".to_string()
    }
}

/// A `<table>` with the given `id` attribute, e.g. `data-table`.
#[derive(Debug, Clone)]
pub struct TableById {
    id: String,
}

impl TableById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TableLocator for TableById {
    // matched on the attribute: ids need not be valid CSS identifiers
    fn locate<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&TABLE_SELECTOR)
            .find(|table| table.value().id() == Some(self.id.as_str()))
    }

    fn describe(&self) -> String {
        format!("<table id=\"{}\">", self.id)
    }
}

pub fn locator_for(table_id: Option<&str>) -> Box<dyn TableLocator> {
    match table_id {
        Some(id) => Box::new(TableById::new(id)),
        None => Box::new(FirstTable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TABLES: &str = r#"
        <html><body>
          <table class="nav"><tr><td>menu</td></tr></table>
          <table id="data-table"><tr><td>data</td></tr></table>
        </body></html>
    "#;

    fn cell_text(table: ElementRef<'_>) -> String {
        table.text().collect::<String>().trim().to_string()
    }

    #[test]
    fn test_first_table_wins() {
        let document = Html::parse_document(TWO_TABLES);
        let table = FirstTable.locate(&document).expect("table present");
        assert_eq!(cell_text(table), "menu");
    }

    #[test]
    fn test_table_by_id() {
        let document = Html::parse_document(TWO_TABLES);
        let table = TableById::new("data-table")
            .locate(&document)
            .expect("table present");
        assert_eq!(cell_text(table), "data");

        assert!(TableById::new("missing").locate(&document).is_none());
    }

    #[test]
    fn test_no_table() {
        let document = Html::parse_document("<html><body><p>Bakımda</p></body></html>");
        assert!(FirstTable.locate(&document).is_none());
    }

    #[test]
    fn test_locator_for() {
        assert_eq!(locator_for(None).describe(), "first <table>");
        assert_eq!(
            locator_for(Some("data-table")).describe(),
            "<table id=\"data-table\">"
        );
    }
}
