// File: src/catalog.rs
// Purpose: Static ordered list of topping choices

use serde::{Deserialize, Serialize};

/// One selectable topping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub id: String,
    pub label: String,
}

impl Topping {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered topping choices
///
/// Drives both the checkbox list and the set of identifiers the schema accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToppingCatalog {
    toppings: Vec<Topping>,
}

impl ToppingCatalog {
    pub fn new(toppings: Vec<Topping>) -> Self {
        Self { toppings }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.toppings.iter().any(|topping| topping.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topping> {
        self.toppings.iter()
    }

    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self::new(vec![
            Topping::new("1", "Pepperoni"),
            Topping::new("2", "Green Peppers"),
            Topping::new("3", "Pineapple"),
            Topping::new("4", "Mushrooms"),
            Topping::new("5", "Ham"),
        ])
    }
}
