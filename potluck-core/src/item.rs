//! Items needed for an event (potluck contributions).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PotluckError, PotluckResult};
use crate::guest_item::GuestItem;
use crate::ids::{EventId, ItemId};
use crate::money::{ExtendedCost, Money, Quantity};

/// A good or contribution with a quantity and a unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub event_id: EventId,
    pub category: String,
    pub name: String,
    pub quantity: Quantity,
    pub qty_uom: String,
    pub cost_perunit: Money,
}

impl Item {
    /// `quantity x cost_perunit`, unrounded.
    pub fn extended_cost(&self) -> ExtendedCost {
        ExtendedCost::of(self.quantity, self.cost_perunit)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.qty_uom, self.name)
    }
}

/// An item together with every guest's selection of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWithSelections {
    #[serde(flatten)]
    pub item: Item,
    pub guest_items: Vec<GuestItem>,
}

/// Fields for a new item. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub event_id: EventId,
    pub category: String,
    pub name: String,
    pub quantity: Quantity,
    pub qty_uom: String,
    pub cost_perunit: Money,
}

impl NewItem {
    pub fn validate(&self) -> PotluckResult<()> {
        if self.name.trim().is_empty() {
            return Err(PotluckError::InvalidInput("item name must not be empty".into()));
        }
        Ok(())
    }

    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            event_id: self.event_id,
            category: self.category,
            name: self.name,
            quantity: self.quantity,
            qty_uom: self.qty_uom,
            cost_perunit: self.cost_perunit,
        }
    }
}

/// Partial update of an item; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub category: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
    pub qty_uom: Option<String>,
    pub cost_perunit: Option<Money>,
}

impl ItemUpdate {
    pub fn apply(self, item: &mut Item) -> PotluckResult<()> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(PotluckError::InvalidInput("item name must not be empty".into()));
            }
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(qty_uom) = self.qty_uom {
            item.qty_uom = qty_uom;
        }
        if let Some(cost_perunit) = self.cost_perunit {
            item.cost_perunit = cost_perunit;
        }
        Ok(())
    }
}
