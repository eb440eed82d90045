//! Element ids for repeated children

use gpui::SharedString;

/// Id of the `ix`-th child of a component whose own id is `base`
pub fn indexed_id(base: &SharedString, ix: usize) -> SharedString {
    SharedString::from(format!("{base}-{ix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_ids_are_distinct_per_child() {
        let base = SharedString::from("order-filter");
        assert_eq!(indexed_id(&base, 0), SharedString::from("order-filter-0"));
        assert_ne!(indexed_id(&base, 1), indexed_id(&base, 2));
    }

    #[test]
    fn indexed_ids_are_scoped_by_parent() {
        let tabs = SharedString::from("campaign-filter");
        let rows = SharedString::from("orders");
        assert_ne!(indexed_id(&tabs, 3), indexed_id(&rows, 3));
    }
}
