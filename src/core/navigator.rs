// src/core/navigator.rs

use crate::core::catalog::Catalog;
use crate::core::error::NavigatorError;
use crate::core::models::{PropertyValue, ToolEntry};
use std::collections::HashMap;
use std::sync::Arc;

/// One displayable row of the tool tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Opaque id handed back by the UI on selection.
    pub id: String,
    pub label: String,
    /// 0 for tools, 1 for their properties, deeper for nested keys.
    pub depth: usize,
    /// Name of the tool this row belongs to.
    pub owner: String,
}

impl TreeRow {
    pub fn is_tool(&self) -> bool {
        self.depth == 0
    }
}

/// Exposes the catalog as a flat, depth-annotated tree and maps selection
/// ids back to catalog entries.
#[derive(Debug, Clone)]
pub struct CatalogNavigator {
    catalog: Arc<Catalog>,
    rows: Vec<TreeRow>,
    by_id: HashMap<String, usize>,
}

impl CatalogNavigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut rows = Vec::new();
        for entry in catalog.iter() {
            push_tool_rows(&mut rows, entry);
        }
        let by_id = rows.iter().enumerate().map(|(i, r)| (r.id.clone(), i)).collect();
        Self { catalog, rows, by_id }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&TreeRow> {
        self.by_id.get(id).map(|&i| &self.rows[i])
    }

    /// Resolves a selection id to the tool that owns the row.
    ///
    /// Both tool rows and property rows resolve to their tool. Ids this
    /// navigator never produced give `NoneSelected`.
    pub fn selection(&self, id: &str) -> Result<&ToolEntry, NavigatorError> {
        self.row(id)
            .and_then(|row| self.catalog.entry(&row.owner).ok())
            .ok_or(NavigatorError::NoneSelected)
    }
}

// Ids follow the tree widget convention: I001, I002, ... in row order.
fn next_id(rows: &[TreeRow]) -> String {
    format!("I{:03}", rows.len() + 1)
}

fn push_tool_rows(rows: &mut Vec<TreeRow>, entry: &ToolEntry) {
    let id = next_id(rows);
    rows.push(TreeRow {
        id,
        label: entry.name.clone(),
        depth: 0,
        owner: entry.name.clone(),
    });
    for (key, value) in &entry.properties {
        push_property_rows(rows, &entry.name, key, value, 1);
    }
}

fn push_property_rows(
    rows: &mut Vec<TreeRow>,
    owner: &str,
    key: &str,
    value: &PropertyValue,
    depth: usize,
) {
    let label = match value {
        PropertyValue::Scalar(s) => format!("{}: {}", key, s),
        PropertyValue::Nested(_) => key.to_string(),
    };
    let id = next_id(rows);
    rows.push(TreeRow {
        id,
        label,
        depth,
        owner: owner.to_string(),
    });
    if let PropertyValue::Nested(children) = value {
        for (child_key, child) in children {
            push_property_rows(rows, owner, child_key, child, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config_loader::load_str;

    fn navigator() -> CatalogNavigator {
        let catalog = load_str(
            r#"{"tools": {
                "nmap": {"flags": "-sV", "ports": {"top": 100}},
                "whois": {}
            }}"#,
        )
        .unwrap();
        CatalogNavigator::new(Arc::new(catalog))
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let nav = navigator();
        let labels: Vec<_> = nav.rows().iter().map(|r| (r.label.as_str(), r.depth)).collect();
        assert_eq!(
            labels,
            vec![("nmap", 0), ("flags: -sV", 1), ("ports", 1), ("top: 100", 2), ("whois", 0)]
        );
    }

    #[test]
    fn test_ids_are_sequential() {
        let nav = navigator();
        let ids: Vec<_> = nav.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["I001", "I002", "I003", "I004", "I005"]);
    }

    #[test]
    fn test_selecting_tool_row() {
        let nav = navigator();
        assert_eq!(nav.selection("I005").unwrap().name, "whois");
    }

    #[test]
    fn test_selecting_property_row_resolves_owner() {
        let nav = navigator();
        assert_eq!(nav.selection("I004").unwrap().name, "nmap");
    }

    #[test]
    fn test_unknown_id_is_none_selected() {
        let nav = navigator();
        assert_eq!(nav.selection("I999"), Err(NavigatorError::NoneSelected));
        assert_eq!(nav.selection(""), Err(NavigatorError::NoneSelected));
        assert_eq!(nav.selection("nmap"), Err(NavigatorError::NoneSelected));
    }

    #[test]
    fn test_empty_catalog_has_no_rows() {
        let nav = CatalogNavigator::new(Arc::new(Catalog::empty()));
        assert!(nav.rows().is_empty());
        assert_eq!(nav.selection("I001"), Err(NavigatorError::NoneSelected));
    }
}
