use std::collections::BTreeSet;
use crate::domain::models::schedule::ScheduleTree;

/// Holds the inventory ids a creator has ticked in the schedule table.
#[derive(Debug, Default, Clone)]
pub struct SelectionController {
    selected: BTreeSet<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { selected: ids.into_iter().map(Into::into).collect() }
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn select_all(&mut self, tree: &ScheduleTree) -> BTreeSet<String> {
        self.selected = tree.inventory_ids();
        self.selected.clone()
    }

    pub fn unselect_all(&mut self) -> BTreeSet<String> {
        self.selected.clear();
        BTreeSet::new()
    }

    pub fn toggle(&mut self, inventory_id: &str, selected: bool) {
        if selected {
            self.selected.insert(inventory_id.to_string());
        } else {
            self.selected.remove(inventory_id);
        }
    }

    /// Drops selections that no longer appear in the current tree.
    pub fn reconcile(current_tree_ids: &BTreeSet<String>, selection: &BTreeSet<String>) -> BTreeSet<String> {
        selection.intersection(current_tree_ids).cloned().collect()
    }

    pub fn reconcile_against(&mut self, tree: &ScheduleTree) -> BTreeSet<String> {
        self.selected = Self::reconcile(&tree.inventory_ids(), &self.selected);
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use crate::domain::models::schedule::{ColorTag, DateGroup, ScheduleRow};

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn tree(layout: &[usize]) -> ScheduleTree {
        let mut counter = 0;
        let groups = layout
            .iter()
            .enumerate()
            .map(|(day, &rows)| {
                let mut group = DateGroup::new(format!("2024-05-0{}", day + 1));
                for _ in 0..rows {
                    counter += 1;
                    let start = Utc.with_ymd_and_hms(2024, 5, day as u32 + 1, 9, 0, 0).unwrap();
                    group.children.push(ScheduleRow {
                        session_id: "s".into(),
                        inventory_id: format!("inv-{}", counter),
                        session_name: "Class".into(),
                        start_time: start,
                        end_time: start + Duration::hours(1),
                        color_tag: ColorTag::Red,
                    });
                }
                group
            })
            .collect();
        ScheduleTree { groups }
    }

    #[test]
    fn test_reconcile_drops_orphans() {
        let result = SelectionController::reconcile(&set(&["B", "C", "D"]), &set(&["A", "B", "C"]));
        assert_eq!(result, set(&["B", "C"]));
    }

    #[test]
    fn test_select_all_and_unselect_all() {
        let tree = tree(&[3, 2, 2]);
        let mut controller = SelectionController::new();

        assert_eq!(controller.select_all(&tree).len(), 7);
        assert_eq!(controller.selected().len(), 7);
        assert!(controller.unselect_all().is_empty());
        assert!(controller.selected().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut controller = SelectionController::new();
        controller.toggle("x", true);
        controller.toggle("y", true);
        controller.toggle("x", false);
        controller.toggle("missing", false);
        assert_eq!(controller.selected(), &set(&["y"]));
    }

    #[test]
    fn test_reconcile_against_tree_can_empty_selection() {
        let mut controller = SelectionController::with_selection(["gone-1", "gone-2"]);
        assert!(controller.reconcile_against(&tree(&[2])).is_empty());

        let mut controller = SelectionController::with_selection(["inv-1", "gone"]);
        assert_eq!(controller.reconcile_against(&tree(&[2])), set(&["inv-1"]));
    }
}
