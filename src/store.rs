use crate::models::Item;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store handle shared with the handler layer.
///
/// The lock exists only because axum serves requests from a multithreaded
/// runtime; the store itself promises nothing beyond last-write-wins.
pub type SharedStore = Arc<Mutex<ItemStore>>;

/// In-memory container of Items.
///
/// Holds items in insertion order and hands out ids sequentially. The store
/// itself has single-threaded semantics; callers that share it across tasks
/// wrap it in a lock.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store pre-populated with the sample to-do entries the
    /// service ships with.
    pub fn with_sample_items() -> Self {
        Self {
            items: vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                    description: "This is item 1".to_string(),
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                    description: "This is item 2".to_string(),
                },
            ],
        }
    }

    /// All items, in insertion order.
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id. Linear scan.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item and return it.
    ///
    /// The id is the last item's id plus one (1 when the store is empty).
    /// This means an id freed by deleting the tail can be handed out again;
    /// kept as-is for wire compatibility, see the unit test below.
    pub fn create(&mut self, name: String, description: String) -> Item {
        let id = self.items.last().map_or(1, |item| item.id + 1);
        let item = Item {
            id,
            name,
            description,
        };
        self.items.push(item.clone());
        item
    }

    /// Overwrite the supplied fields of an existing item.
    ///
    /// Returns `None` when no item has the given id.
    pub fn update(
        &mut self,
        id: u64,
        name: Option<String>,
        description: Option<String>,
    ) -> Option<&Item> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(description) = description {
            item.description = description;
        }
        Some(item)
    }

    /// Remove the item with the given id. Succeeds silently when absent.
    pub fn delete(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }
}
