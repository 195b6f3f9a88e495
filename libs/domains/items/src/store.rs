//! In-memory item collection and id allocation.
//!
//! `ItemStore` is synchronous and knows nothing about locking or disk. The
//! repositories wrap it in a mutex and decide where the state lives; the
//! serialized form is the persisted document `{"items": [...], "nextId": n}`.

use serde::{Deserialize, Serialize};

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};

const FIRST_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Id the next successful create will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Validates, assigns the next id and appends.
    pub fn create(&mut self, input: ItemInput) -> ItemResult<Item> {
        let fields = input.validated()?;

        let item = Item::new(self.next_id, fields);
        self.next_id += 1;
        self.items.push(item.clone());

        Ok(item)
    }

    /// All items in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn get_by_id(&self, id: u64) -> ItemResult<Item> {
        let index = self.position(id)?;
        Ok(self.items[index].clone())
    }

    /// Replaces name and date in place.
    ///
    /// An unknown id is reported before the input is looked at, so a missing
    /// item with invalid input is still `NotFound`.
    pub fn update(&mut self, id: u64, input: ItemInput) -> ItemResult<Item> {
        let index = self.position(id)?;
        let fields = input.validated()?;

        let item = &mut self.items[index];
        item.apply_update(fields);

        Ok(item.clone())
    }

    /// Removes the item and returns it. Other ids are untouched.
    pub fn delete(&mut self, id: u64) -> ItemResult<Item> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Raises `next_id` above every stored id.
    ///
    /// Returns true when the counter had to move, which only happens for a
    /// document edited by hand or written by an older process.
    pub fn reconcile_next_id(&mut self) -> bool {
        let floor = self
            .items
            .iter()
            .map(|item| item.id + 1)
            .max()
            .unwrap_or(FIRST_ID)
            .max(FIRST_ID);

        if self.next_id < floor {
            self.next_id = floor;
            true
        } else {
            false
        }
    }

    fn position(&self, id: u64) -> ItemResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, date: &str) -> ItemInput {
        ItemInput::new(name, date)
    }

    fn ids(store: &ItemStore) -> Vec<u64> {
        store.list_all().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.list_all().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let mut store = ItemStore::new();
        let created = store.create(input("A", "01-01-2020")).unwrap();

        let fetched = store.get_by_id(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.date, "01-01-2020");
    }

    #[test]
    fn test_ids_increase_and_are_never_reused() {
        let mut store = ItemStore::new();
        let a = store.create(input("A", "01-01-2020")).unwrap();
        let b = store.create(input("B", "02-02-2020")).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(b.id).unwrap();
        store.delete(a.id).unwrap();

        let c = store.create(input("C", "03-03-2020")).unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let mut store = ItemStore::new();
        assert!(matches!(
            store.create(input("A", "31-02-2024")),
            Err(ItemError::InvalidDate)
        ));
        assert!(matches!(
            store.create(ItemInput::default()),
            Err(ItemError::MissingField)
        ));

        assert!(store.list_all().is_empty());
        assert_eq!(store.create(input("A", "01-01-2020")).unwrap().id, 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ItemStore::new();
        assert!(matches!(store.get_by_id(42), Err(ItemError::NotFound(42))));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = ItemStore::new();
        store.create(input("A", "01-01-2020")).unwrap();
        store.create(input("B", "02-02-2020")).unwrap();
        store.create(input("C", "03-03-2020")).unwrap();

        let updated = store.update(2, input("B2", "29-02-2024")).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "B2");

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.get_by_id(2).unwrap().date, "29-02-2024");
    }

    #[test]
    fn test_update_unknown_id_wins_over_invalid_input() {
        let mut store = ItemStore::new();
        store.create(input("A", "01-01-2020")).unwrap();

        for bad in [
            ItemInput::default(),
            input("", ""),
            input("A", "99-99-9999"),
            input("A", "01-01-2020"),
        ] {
            assert!(matches!(store.update(9, bad), Err(ItemError::NotFound(9))));
        }
    }

    #[test]
    fn test_update_existing_id_validates_input() {
        let mut store = ItemStore::new();
        store.create(input("A", "01-01-2020")).unwrap();

        assert!(matches!(
            store.update(1, input("", "01-01-2020")),
            Err(ItemError::MissingField)
        ));
        assert!(matches!(
            store.update(1, input("A", "2020-01-01")),
            Err(ItemError::InvalidDate)
        ));
        assert_eq!(store.get_by_id(1).unwrap().name, "A");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = ItemStore::new();
        for (name, date) in [("A", "01-01-2020"), ("B", "02-02-2020"), ("C", "03-03-2020")] {
            store.create(input(name, date)).unwrap();
        }

        let removed = store.delete(2).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(ids(&store), vec![1, 3]);
        assert!(matches!(store.delete(2), Err(ItemError::NotFound(2))));
    }

    #[test]
    fn test_insertion_order_survives_mixed_operations() {
        let mut store = ItemStore::new();
        for (name, date) in [("A", "01-01-2020"), ("B", "02-02-2020"), ("C", "03-03-2020")] {
            store.create(input(name, date)).unwrap();
        }
        store.update(1, input("A2", "01-01-2021")).unwrap();
        store.delete(2).unwrap();
        store.create(input("D", "04-04-2020")).unwrap();
        store.update(3, input("C2", "03-03-2021")).unwrap();

        let names: Vec<String> = store.list_all().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["A2", "C2", "D"]);
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_document_shape() {
        let mut store = ItemStore::new();
        store.create(input("A", "01-01-2020")).unwrap();

        assert_eq!(
            serde_json::to_value(&store).unwrap(),
            serde_json::json!({
                "items": [{ "id": 1, "name": "A", "date": "01-01-2020" }],
                "nextId": 2
            })
        );
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let store: ItemStore = serde_json::from_str("{}").unwrap();
        assert_eq!(store, ItemStore::new());
    }

    #[test]
    fn test_reconcile_next_id() {
        let mut store: ItemStore = serde_json::from_value(serde_json::json!({
            "items": [{ "id": 7, "name": "A", "date": "01-01-2020" }],
            "nextId": 3
        }))
        .unwrap();

        assert!(store.reconcile_next_id());
        assert_eq!(store.next_id(), 8);
        assert!(!store.reconcile_next_id());
        assert_eq!(store.create(input("B", "02-02-2020")).unwrap().id, 8);
    }

    #[test]
    fn test_reconcile_zero_counter_on_empty_store() {
        let mut store: ItemStore = serde_json::from_str(r#"{"items": [], "nextId": 0}"#).unwrap();
        assert!(store.reconcile_next_id());
        assert_eq!(store.next_id(), 1);
    }
}
