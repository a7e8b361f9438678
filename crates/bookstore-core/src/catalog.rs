//! # Catalog
//!
//! The in-memory list of books the store sells. Carts borrow items from here,
//! so a catalog must outlive every cart built on it.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogItem;

/// An ordered list of catalog items.
///
/// Titles are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// Appends an item to the end of the listing.
    pub fn push(&mut self, item: CatalogItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds an item by title, ignoring case and surrounding whitespace.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if no item carries that title.
    pub fn find_by_title(&self, title: &str) -> CoreResult<&CatalogItem> {
        let wanted = title.trim();
        self.items
            .iter()
            .find(|item| item.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::ItemNotFound(wanted.to_string()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn book(title: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(title, "Author", "2020-01-01", "Genre", Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_find_by_title() {
        let catalog: Catalog = vec![book("Open The Soul", 4000), book("Cyber Security", 3500)]
            .into_iter()
            .collect();

        let found = catalog.find_by_title(" cyber security ").unwrap();
        assert_eq!(found.unit_price(), Money::from_cents(3500));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_find_missing_title() {
        let catalog = Catalog::new(vec![book("Open The Soul", 4000)]);
        let err = catalog.find_by_title("Dune").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(ref t) if t == "Dune"));
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let mut catalog = Catalog::default();
        assert!(catalog.is_empty());
        catalog.push(book("B", 100));
        catalog.push(book("A", 200));

        let titles: Vec<&str> = catalog.iter().map(CatalogItem::title).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"title":"Good Doctor","author":"Amber Ali","publication_date":"2022-012-01","genre":"Education","unit_price":"38.00"},
            {"title":"Math and Simson","author":"Khalil Abdu","publication_date":"2022-11-15","genre":"Education","unit_price":"30.00"}
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.find_by_title("math and simson").unwrap().unit_price(),
            Money::from_cents(3000)
        );
    }

    #[test]
    fn test_catalog_from_json_rejects_negative_price() {
        let json = r#"[
            {"title":"Good Doctor","author":"Amber Ali","publication_date":"2022-12-01","genre":"Education","unit_price":"38.00"},
            {"title":"Refund","author":"Nobody","publication_date":"2020-01-01","genre":"Misc","unit_price":"-100"}
        ]"#;
        let err = serde_json::from_str::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("price must not be negative"));
    }
}
