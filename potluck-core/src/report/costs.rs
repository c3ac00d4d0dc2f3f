use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{PotluckError, PotluckResult};
use crate::guest_item::GuestItemRow;
use crate::ids::{EventId, ItemId};
use crate::item::Item;
use crate::money::{ExtendedCost, Money, Quantity};
use crate::store::{EventStore, SelectionFilter};

/// Claimed quantity and cost of one item across all guests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCost {
    pub item_id: ItemId,
    pub selected: bool,
    pub name: String,
    #[serde(rename = "SumItemQty")]
    pub sum_item_qty: Quantity,
    pub total_cost: Money,
}

/// Claimed quantity and cost of all rows sharing a `selected` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionCost {
    pub selected: bool,
    #[serde(rename = "SumItemQty")]
    pub sum_item_qty: Quantity,
    pub total_cost: Money,
}

/// Running sums for one group. Each row contributes its item's full quantity.
#[derive(Default)]
struct Tally {
    quantity: Quantity,
    cost: ExtendedCost,
}

impl Tally {
    fn add(&mut self, item: &Item) -> PotluckResult<()> {
        self.quantity = self.quantity.checked_add(item.quantity)?;
        self.cost = self.cost + item.extended_cost();
        Ok(())
    }
}

fn joined_item(row: &GuestItemRow) -> PotluckResult<&Item> {
    row.item.as_ref().ok_or_else(|| {
        let s = &row.selection;
        PotluckError::AggregationFailure(format!(
            "guest item {}/{}/{} references item {} which was not loaded",
            s.event_id, s.guest_id, s.item_id, s.item_id
        ))
    })
}

/// Group rows by item and `selected` flag, ascending by item id.
pub fn cost_by_item(rows: &[GuestItemRow]) -> PotluckResult<Vec<ItemCost>> {
    let mut groups: BTreeMap<(ItemId, bool), (String, Tally)> = BTreeMap::new();

    for row in rows {
        let item = joined_item(row)?;
        let (_, tally) = groups
            .entry((item.id, row.selection.selected))
            .or_insert_with(|| (item.name.clone(), Tally::default()));
        tally.add(item)?;
    }

    groups
        .into_iter()
        .map(|((item_id, selected), (name, tally))| {
            Ok(ItemCost {
                item_id,
                selected,
                name,
                sum_item_qty: tally.quantity,
                total_cost: tally.cost.to_money()?,
            })
        })
        .collect()
}

/// Group rows by their `selected` flag, unselected first.
pub fn cost_by_selection(rows: &[GuestItemRow]) -> PotluckResult<Vec<SelectionCost>> {
    let mut groups: BTreeMap<bool, Tally> = BTreeMap::new();

    for row in rows {
        let item = joined_item(row)?;
        groups.entry(row.selection.selected).or_default().add(item)?;
    }

    groups
        .into_iter()
        .map(|(selected, tally)| {
            Ok(SelectionCost {
                selected,
                sum_item_qty: tally.quantity,
                total_cost: tally.cost.to_money()?,
            })
        })
        .collect()
}

/// Exact cost of every row, rounded to cents once.
pub fn total_cost(rows: &[GuestItemRow]) -> PotluckResult<Money> {
    let mut tally = Tally::default();
    for row in rows {
        tally.add(joined_item(row)?)?;
    }
    tally.cost.to_money()
}

/// Per-item totals of an event's claimed items with their overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimedCosts {
    pub items: Vec<ItemCost>,
    pub total_cost: Money,
}

async fn selected_rows<S: EventStore>(store: &S, event_id: EventId) -> PotluckResult<Vec<GuestItemRow>> {
    if store.find_event(event_id).await?.is_none() {
        return Err(PotluckError::not_found(format!("Event {}", event_id)));
    }
    store
        .list_guest_item_selections(&SelectionFilter::selected(event_id))
        .await
}

/// Per-item totals of the items guests have claimed for an event.
pub async fn item_costs<S: EventStore>(store: &S, event_id: EventId) -> PotluckResult<Vec<ItemCost>> {
    let rows = selected_rows(store, event_id).await?;
    let costs = cost_by_item(&rows)?;

    debug!(event_id = %event_id, rows = rows.len(), items = costs.len(), "aggregated item costs");
    Ok(costs)
}

/// Per-item and overall totals from a single fetch of the claimed rows.
pub async fn claimed_costs<S: EventStore>(store: &S, event_id: EventId) -> PotluckResult<ClaimedCosts> {
    let rows = selected_rows(store, event_id).await?;
    let costs = ClaimedCosts {
        items: cost_by_item(&rows)?,
        total_cost: total_cost(&rows)?,
    };

    debug!(event_id = %event_id, rows = rows.len(), total = %costs.total_cost, "aggregated claimed costs");
    Ok(costs)
}

/// Overall total of the items guests have claimed for an event. Yields at
/// most one row, for `selected = true`.
pub async fn selection_costs<S: EventStore>(
    store: &S,
    event_id: EventId,
) -> PotluckResult<Vec<SelectionCost>> {
    let rows = selected_rows(store, event_id).await?;
    let costs = cost_by_selection(&rows)?;

    debug!(event_id = %event_id, rows = rows.len(), "aggregated selection costs");
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, CAKE, NAPKINS, PICNIC, SALAD};

    fn row(guest_id: u64, item: &Item, selected: bool) -> GuestItemRow {
        GuestItemRow {
            selection: fixtures::guest_item(item.event_id, guest_id, item.id, selected),
            item: Some(item.clone()),
            guest: None,
        }
    }

    #[test]
    fn test_total_is_exact_decimal() {
        let salad = fixtures::item(SALAD, PICNIC, "Salad", "2", "3.50");
        let cake = fixtures::item(CAKE, PICNIC, "Cake", "1", "10.00");
        let rows = vec![row(1, &salad, true), row(2, &cake, true)];

        let totals = cost_by_selection(&rows).unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_cost.to_string(), "17.00");
        assert_eq!(totals[0].sum_item_qty.to_string(), "3");
    }

    #[test]
    fn test_group_by_item() {
        let salad = fixtures::item(SALAD, PICNIC, "Salad", "2", "3.50");
        let cake = fixtures::item(CAKE, PICNIC, "Cake", "1", "10.00");
        let rows = vec![row(1, &cake, true), row(2, &salad, true), row(3, &salad, true)];

        let costs = cost_by_item(&rows).unwrap();

        assert_eq!(
            costs,
            vec![
                ItemCost {
                    item_id: SALAD,
                    selected: true,
                    name: "Salad".into(),
                    sum_item_qty: "4".parse().unwrap(),
                    total_cost: "14.00".parse().unwrap(),
                },
                ItemCost {
                    item_id: CAKE,
                    selected: true,
                    name: "Cake".into(),
                    sum_item_qty: "1".parse().unwrap(),
                    total_cost: "10.00".parse().unwrap(),
                },
            ]
        );
    }

    #[test]
    fn test_group_by_selection_flag() {
        let salad = fixtures::item(SALAD, PICNIC, "Salad", "2", "3.50");
        let napkins = fixtures::item(NAPKINS, PICNIC, "Napkins", "1", "0.99");
        let rows = vec![row(1, &salad, true), row(2, &napkins, false)];

        let costs = cost_by_selection(&rows).unwrap();

        assert_eq!(costs.len(), 2);
        assert!(!costs[0].selected);
        assert_eq!(costs[0].total_cost.to_string(), "0.99");
        assert!(costs[1].selected);
        assert_eq!(costs[1].total_cost.to_string(), "7.00");
    }

    #[test]
    fn test_fractional_quantities() {
        let cheese = fixtures::item(SALAD, PICNIC, "Cheese", "0.75", "12.99");
        let costs = cost_by_item(&[row(1, &cheese, true), row(2, &cheese, true)]).unwrap();

        // 1.5 x 12.99 = 19.485, rounded once
        assert_eq!(costs[0].sum_item_qty.to_string(), "1.5");
        assert_eq!(costs[0].total_cost.to_string(), "19.49");
    }

    #[test]
    fn test_missing_item_is_aggregation_failure() {
        let mut orphan = row(1, &fixtures::item(SALAD, PICNIC, "Salad", "1", "1.00"), true);
        orphan.item = None;

        let err = cost_by_item(&[orphan.clone()]).unwrap_err();
        assert!(matches!(err, PotluckError::AggregationFailure(_)));
        assert!(cost_by_selection(&[orphan]).is_err());
    }

    #[test]
    fn test_no_rows_no_groups() {
        assert!(cost_by_item(&[]).unwrap().is_empty());
        assert!(cost_by_selection(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let salad = fixtures::item(SALAD, PICNIC, "Salad", "2", "3.50");
        let costs = cost_by_item(&[row(1, &salad, true)]).unwrap();
        let json = serde_json::to_value(&costs[0]).unwrap();

        assert_eq!(json["SumItemQty"], "2");
        assert_eq!(json["total_cost"], "7.00");
        assert_eq!(json["name"], "Salad");
        assert_eq!(json["selected"], true);
    }

    #[test]
    fn test_same_item_split_by_selection_flag() {
        let salad = fixtures::item(SALAD, PICNIC, "Salad", "2", "3.50");
        let costs = cost_by_item(&[row(1, &salad, true), row(2, &salad, false)]).unwrap();

        assert_eq!(costs.len(), 2);
        assert!(!costs[0].selected);
        assert!(costs[1].selected);
        assert_eq!(costs[1].total_cost.to_string(), "7.00");
    }

    #[test]
    fn test_total_rounds_once_not_per_item() {
        let rows: Vec<_> = [SALAD, CAKE, NAPKINS]
            .into_iter()
            .map(|id| row(1, &fixtures::item(id, PICNIC, "Crumbs", "0.5", "0.01"), true))
            .collect();

        // Each item alone rounds 0.005 up to a cent; together 0.015 is two cents
        let per_item: i64 = cost_by_item(&rows)
            .unwrap()
            .iter()
            .map(|c| c.total_cost.cents())
            .sum();
        assert_eq!(per_item, 3);

        assert_eq!(total_cost(&rows).unwrap().cents(), 2);
        assert_eq!(cost_by_selection(&rows).unwrap()[0].total_cost.cents(), 2);
    }

    #[tokio::test]
    async fn test_item_costs_from_store() {
        let store = fixtures::store();
        let costs = item_costs(&store, PICNIC).await.unwrap();

        // Napkins are only claimed with selected = false
        let names: Vec<_> = costs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Potato salad", "Cake"]);
        assert_eq!(costs[0].total_cost.to_string(), "14.00");
        assert_eq!(costs[1].total_cost.to_string(), "10.00");
    }

    #[tokio::test]
    async fn test_selection_costs_from_store() {
        let store = fixtures::store();
        let costs = selection_costs(&store, PICNIC).await.unwrap();

        assert_eq!(costs.len(), 1);
        assert!(costs[0].selected);
        assert_eq!(costs[0].sum_item_qty.to_string(), "5");
        assert_eq!(costs[0].total_cost.to_string(), "24.00");
    }

    #[tokio::test]
    async fn test_claimed_costs_total_matches_selection_costs() {
        let store = fixtures::store();

        let claimed = claimed_costs(&store, PICNIC).await.unwrap();
        let overall = selection_costs(&store, PICNIC).await.unwrap();

        assert_eq!(claimed.items, item_costs(&store, PICNIC).await.unwrap());
        assert_eq!(claimed.total_cost, overall[0].total_cost);
        assert_eq!(claimed.total_cost.to_string(), "24.00");
    }

    #[tokio::test]
    async fn test_aggregation_is_idempotent() {
        let store = fixtures::store();

        let first = item_costs(&store, PICNIC).await.unwrap();
        let second = item_costs(&store, PICNIC).await.unwrap();
        assert_eq!(first, second);

        let first = selection_costs(&store, PICNIC).await.unwrap();
        let second = selection_costs(&store, PICNIC).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_event_is_not_found() {
        let store = fixtures::store();
        let err = item_costs(&store, EventId(404)).await.unwrap_err();
        assert!(matches!(err, PotluckError::NotFound(_)));
    }
}
