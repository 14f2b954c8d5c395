//! Filter selection and dropdown option types.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One selectable value in a field's filter dropdown.
///
/// For this schema the label always equals the value; the pair exists so
/// a backing store may localize labels without changing match semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Per-field sets of accepted values.
///
/// A field that is absent, or present with an empty set, imposes no
/// constraint. Constrained fields combine with AND; accepted values
/// within one field combine with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    accepted: HashMap<String, HashSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted values for `field`. An empty list clears the
    /// constraint.
    pub fn set(&mut self, field: impl Into<String>, values: Vec<String>) {
        let field = field.into();
        if values.is_empty() {
            self.accepted.remove(&field);
        } else {
            self.accepted.insert(field, values.into_iter().collect());
        }
    }

    /// Remove the constraint on `field`
    pub fn clear(&mut self, field: &str) {
        self.accepted.remove(field);
    }

    /// Remove every constraint
    pub fn clear_all(&mut self) {
        self.accepted.clear();
    }

    /// The accepted set for `field`, if it constrains anything
    pub fn constraint(&self, field: &str) -> Option<&HashSet<String>> {
        self.accepted.get(field).filter(|set| !set.is_empty())
    }

    /// Whether `value` passes the constraint on `field`.
    ///
    /// An unconstrained field accepts everything, including "no value";
    /// a constrained field never accepts "no value".
    pub fn accepts(&self, field: &str, value: Option<&str>) -> bool {
        match self.constraint(field) {
            None => true,
            Some(set) => value.is_some_and(|v| set.contains(v)),
        }
    }

    /// Fields that currently constrain the visible set
    pub fn constrained_fields(&self) -> impl Iterator<Item = &str> {
        self.accepted
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(field, _)| field.as_str())
    }

    /// True when no field is constrained
    pub fn is_empty(&self) -> bool {
        self.constrained_fields().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_accepts_anything() {
        let selection = FilterSelection::new();
        assert!(selection.accepts("Channel", Some("Retail")));
        assert!(selection.accepts("Channel", None));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_constrained_field_matches_membership() {
        let mut selection = FilterSelection::new();
        selection.set("Channel", vec!["Retail".into(), "Mail".into()]);

        assert!(selection.accepts("Channel", Some("Retail")));
        assert!(selection.accepts("Channel", Some("Mail")));
        assert!(!selection.accepts("Channel", Some("Specialty")));
        assert!(!selection.accepts("Channel", None));
    }

    #[test]
    fn test_empty_value_list_clears_constraint() {
        let mut selection = FilterSelection::new();
        selection.set("Channel", vec!["Retail".into()]);
        selection.set("Channel", vec![]);

        assert!(selection.is_empty());
        assert!(selection.accepts("Channel", Some("Mail")));
    }

    #[test]
    fn test_clear_single_field() {
        let mut selection = FilterSelection::new();
        selection.set("Channel", vec!["Retail".into()]);
        selection.set("MD State", vec!["NY".into()]);
        selection.clear("Channel");

        assert!(selection.accepts("Channel", Some("Mail")));
        assert!(!selection.accepts("MD State", Some("CA")));
    }

    #[test]
    fn test_option_label_equals_value() {
        let option = FieldOption::new("II");
        assert_eq!(option.value, "II");
        assert_eq!(option.label, "II");
    }
}
