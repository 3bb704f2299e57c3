//! Orderings over equipment and groups

use crate::core::compare::{Comparator, nulls_first, nulls_last, reversed, then};
use crate::core::extension::Extension;
use crate::equipment::model::{Equipment, EquipmentGroup};
use std::sync::Arc;

/// Sort keys accepted by the equipment listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentSorter {
    DisplayName,
    CreateTime,
}

impl EquipmentSorter {
    /// Parse a `sort` token, ignoring case
    ///
    /// Unknown tokens yield `None`, which sorts like an absent key.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "DISPLAY_NAME" => Some(Self::DisplayName),
            "CREATE_TIME" => Some(Self::CreateTime),
            _ => None,
        }
    }

    /// Ordering for a sort key and direction
    ///
    /// Only an explicit `Some(false)` reverses, and it reverses the whole
    /// comparator including the name tie-break.
    pub fn comparator(sorter: Option<Self>, ascending: Option<bool>) -> Comparator<Equipment> {
        let comparator = match sorter {
            Some(Self::DisplayName) => then(display_name_comparator(), name_comparator()),
            Some(Self::CreateTime) | None => then(create_time_comparator(), name_comparator()),
        };
        match ascending {
            Some(false) => reversed(comparator),
            _ => comparator,
        }
    }
}

fn name_comparator<E: Extension>() -> Comparator<E> {
    Arc::new(|a: &E, b: &E| a.name().cmp(b.name()))
}

fn display_name_comparator() -> Comparator<Equipment> {
    Arc::new(|a: &Equipment, b: &Equipment| {
        nulls_first(a.spec.display_name.as_deref(), b.spec.display_name.as_deref())
    })
}

/// Creation timestamp, oldest first
pub fn create_time_comparator<E: Extension>() -> Comparator<E> {
    Arc::new(|a: &E, b: &E| a.creation_timestamp().cmp(&b.creation_timestamp()))
}

/// Priority (missing last), then newest first, then name
pub fn default_equipment_comparator() -> Comparator<Equipment> {
    let priority: Comparator<Equipment> = Arc::new(|a: &Equipment, b: &Equipment| {
        nulls_last(a.spec.priority, b.spec.priority)
    });
    then(
        then(priority, reversed(create_time_comparator())),
        name_comparator(),
    )
}

/// Priority (missing last), then oldest first, then name
pub fn default_group_comparator() -> Comparator<EquipmentGroup> {
    let priority: Comparator<EquipmentGroup> =
        Arc::new(|a: &EquipmentGroup, b: &EquipmentGroup| {
            nulls_last(a.spec.priority, b.spec.priority)
        });
    then(
        then(priority, create_time_comparator()),
        name_comparator(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extension::Metadata;
    use crate::equipment::model::{EquipmentGroupSpec, EquipmentSpec};
    use chrono::{Duration, Utc};

    fn equipment(name: &str, display_name: Option<&str>, minutes_ago: i64) -> Equipment {
        let mut spec = EquipmentSpec::new("", "https://example.com", "peripherals");
        spec.display_name = display_name.map(str::to_string);
        Equipment::new(
            Metadata::created_at(name, Utc::now() - Duration::minutes(minutes_ago)),
            spec,
        )
    }

    fn sorted(mut items: Vec<Equipment>, comparator: Comparator<Equipment>) -> Vec<String> {
        items.sort_by(|a, b| comparator(a, b));
        items.into_iter().map(|e| e.metadata.name).collect()
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(EquipmentSorter::parse("display_name"), Some(EquipmentSorter::DisplayName));
        assert_eq!(EquipmentSorter::parse("CREATE_TIME"), Some(EquipmentSorter::CreateTime));
        assert_eq!(EquipmentSorter::parse("priority"), None);
    }

    #[test]
    fn test_create_time_ascending_and_reversed() {
        let items = vec![equipment("new", None, 1), equipment("old", None, 10)];

        let ascending = EquipmentSorter::comparator(Some(EquipmentSorter::CreateTime), Some(true));
        assert_eq!(sorted(items.clone(), ascending), vec!["old", "new"]);

        let descending = EquipmentSorter::comparator(Some(EquipmentSorter::CreateTime), Some(false));
        assert_eq!(sorted(items, descending), vec!["new", "old"]);
    }

    #[test]
    fn test_unset_direction_keeps_ascending() {
        let items = vec![equipment("new", None, 1), equipment("old", None, 10)];
        let comparator = EquipmentSorter::comparator(None, None);
        assert_eq!(sorted(items, comparator), vec!["old", "new"]);
    }

    #[test]
    fn test_display_name_puts_missing_first() {
        let items = vec![
            equipment("b", Some("Mouse"), 1),
            equipment("a", None, 2),
            equipment("c", Some("Keyboard"), 3),
        ];
        let comparator = EquipmentSorter::comparator(Some(EquipmentSorter::DisplayName), None);
        assert_eq!(sorted(items, comparator), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_tie_break_on_name_is_reversed_too() {
        let created = Utc::now();
        let spec = EquipmentSpec::new("Same", "https://example.com", "g");
        let items = vec![
            Equipment::new(Metadata::created_at("a", created), spec.clone()),
            Equipment::new(Metadata::created_at("b", created), spec),
        ];
        let comparator = EquipmentSorter::comparator(Some(EquipmentSorter::DisplayName), Some(false));
        assert_eq!(sorted(items, comparator), vec!["b", "a"]);
    }

    #[test]
    fn test_default_equipment_order() {
        let mut first = equipment("first", Some("A"), 30);
        first.spec.priority = Some(0);
        let mut older = equipment("older", Some("C"), 20);
        older.spec.priority = Some(1);
        let mut newer = equipment("newer", Some("D"), 5);
        newer.spec.priority = Some(1);
        let unprioritized = equipment("unprioritized", Some("B"), 0);

        let items = vec![unprioritized, older, first, newer];
        assert_eq!(
            sorted(items, default_equipment_comparator()),
            vec!["first", "newer", "older", "unprioritized"]
        );
    }

    #[test]
    fn test_default_group_order() {
        let group = |name: &str, priority: Option<i32>, minutes_ago: i64| {
            EquipmentGroup::new(
                Metadata::created_at(name, Utc::now() - Duration::minutes(minutes_ago)),
                EquipmentGroupSpec {
                    display_name: name.to_uppercase(),
                    priority,
                },
            )
        };
        let mut groups = vec![
            group("none", None, 50),
            group("newer", Some(1), 1),
            group("older", Some(1), 10),
            group("top", Some(0), 0),
        ];
        let comparator = default_group_comparator();
        groups.sort_by(|a, b| comparator(a, b));

        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["top", "older", "newer", "none"]);
    }
}
