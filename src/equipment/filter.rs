//! Predicates built from listing parameters

use crate::core::compare::{Predicate, always, and};
use crate::core::error::EquipmentsResult;
use crate::core::query::ListQuery;
use crate::equipment::model::{Equipment, EquipmentGroup};
use crate::equipment::query::EquipmentQuery;
use std::sync::Arc;

/// Equipment matching every parameter of `query`
///
/// Fails when a selector expression is malformed.
pub fn equipment_predicate(query: &EquipmentQuery) -> EquipmentsResult<Predicate<Equipment>> {
    let mut predicate = always();

    if let Some(keyword) = query.keyword() {
        predicate = and(predicate, keyword_predicate(keyword));
    }
    if let Some(group) = query.group() {
        predicate = and(predicate, in_group(group));
    }

    Ok(and(predicate, query.list_query().selector_predicate()?))
}

/// Groups matching the selectors of `query`
pub fn group_predicate(query: &ListQuery) -> EquipmentsResult<Predicate<EquipmentGroup>> {
    query.selector_predicate()
}

/// Equipment whose `groupName` equals `group`, case-sensitive
pub fn in_group(group: &str) -> Predicate<Equipment> {
    let group = group.to_string();
    Arc::new(move |equipment: &Equipment| equipment.spec.group_name == group)
}

/// Equipment whose display name contains `keyword`, ignoring case
pub fn keyword_predicate(keyword: &str) -> Predicate<Equipment> {
    let keyword = keyword.to_lowercase();
    Arc::new(move |equipment: &Equipment| {
        equipment
            .spec
            .display_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extension::Metadata;
    use crate::equipment::model::EquipmentSpec;

    fn equipment(name: &str, display_name: &str, group: &str) -> Equipment {
        Equipment::new(
            Metadata::named(name),
            EquipmentSpec::new(display_name, "https://example.com", group),
        )
    }

    #[test]
    fn test_keyword_ignores_case() {
        let keyboard = equipment("kb", "Mechanical Keyboard", "peripherals");
        for keyword in ["board", "BOARD", "mech"] {
            assert!(keyword_predicate(keyword)(&keyboard), "{keyword}");
        }
        assert!(!keyword_predicate("mouse")(&keyboard));
    }

    #[test]
    fn test_keyword_skips_missing_display_name() {
        let mut unnamed = equipment("x", "", "peripherals");
        unnamed.spec.display_name = None;
        assert!(!keyword_predicate("a")(&unnamed));
    }

    #[test]
    fn test_group_is_exact() {
        let lower = equipment("a", "A", "peripherals");
        let upper = equipment("b", "B", "Peripherals");
        let predicate = in_group("Peripherals");
        assert!(!predicate(&lower));
        assert!(predicate(&upper));
    }

    #[test]
    fn test_parameters_are_anded() {
        let query = EquipmentQuery {
            group: Some("peripherals".to_string()),
            keyword: Some("key".to_string()),
            ..Default::default()
        };
        let predicate = equipment_predicate(&query).unwrap();

        assert!(predicate(&equipment("a", "Keyboard", "peripherals")));
        assert!(!predicate(&equipment("b", "Keyboard", "desk")));
        assert!(!predicate(&equipment("c", "Mouse", "peripherals")));
    }

    #[test]
    fn test_blank_parameters_match_everything() {
        let query = EquipmentQuery {
            group: Some(" ".to_string()),
            keyword: Some(String::new()),
            ..Default::default()
        };
        let predicate = equipment_predicate(&query).unwrap();
        assert!(predicate(&equipment("a", "Anything", "any")));
    }

    #[test]
    fn test_keyword_is_not_trimmed() {
        let query = EquipmentQuery {
            keyword: Some("Keyboard ".to_string()),
            ..Default::default()
        };
        let predicate = equipment_predicate(&query).unwrap();
        assert!(!predicate(&equipment("kb", "Mechanical Keyboard", "peripherals")));
        assert!(predicate(&equipment("kb2", "Keyboard stand", "peripherals")));
    }

    #[test]
    fn test_malformed_selector_is_rejected() {
        let query = EquipmentQuery {
            label_selector: vec!["=oops".to_string()],
            ..Default::default()
        };
        let err = equipment_predicate(&query).err().unwrap();
        assert_eq!(err.error_code(), "INVALID_SELECTOR");
    }

    #[test]
    fn test_group_predicate_uses_selectors() {
        let query = ListQuery {
            field_selector: vec!["name=desk".to_string()],
            ..Default::default()
        };
        let predicate = group_predicate(&query).unwrap();
        let group = |name: &str| {
            EquipmentGroup::new(
                Metadata::named(name),
                crate::equipment::model::EquipmentGroupSpec {
                    display_name: name.to_string(),
                    priority: None,
                },
            )
        };
        assert!(predicate(&group("desk")));
        assert!(!predicate(&group("chair")));
    }
}
