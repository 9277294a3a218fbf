//! Input validation for Program Increment runs.
//!
//! Checks structural integrity of the backlog and team roster before
//! planning. Detects:
//! - Duplicate item IDs and team names
//! - Dependencies on unknown items
//! - Circular dependencies (DAG validation)
//!
//! Planning itself never requires this stage; it is opt-in via
//! [`SimulationConfig::validate_backlog`](crate::config::SimulationConfig).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Team, WorkItem};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share an ID, or two teams share a name.
    DuplicateId,
    /// A dependency references an item that doesn't exist.
    DanglingDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a backlog and team roster.
///
/// Checks:
/// 1. No duplicate item IDs
/// 2. No duplicate team names
/// 3. All dependencies point to existing items
/// 4. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(items: &[WorkItem], teams: &[Team]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut team_names = HashSet::new();
    for team in teams {
        if !team_names.insert(team.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team name: {}", team.name),
            ));
        }
    }

    let mut item_ids = HashSet::new();
    for item in items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }
    }

    for item in items {
        for dep in &item.depends_on {
            if !item_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingDependency,
                    format!("Item '{}' depends on unknown item '{}'", item.id, dep),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(items) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// Nodes are visited in backlog order so the reported item is stable.
fn detect_cycles(items: &[WorkItem]) -> Option<ValidationError> {
    // prerequisite → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for item in items {
        for dep in &item.depends_on {
            adj.entry(dep.as_str()).or_default().push(item.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for item in items {
        let node = item.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving item '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teams() -> Vec<Team> {
        vec![Team::new("Team A", 30, 10), Team::new("Team B", 25, 12)]
    }

    fn sample_items() -> Vec<WorkItem> {
        vec![
            WorkItem::feature("F1", 8),
            WorkItem::feature("F2", 13).with_dependency("F1"),
            WorkItem::story("S1", 3).with_dependency("F2"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_items(), &sample_teams()).is_ok());
    }

    #[test]
    fn test_duplicate_item_id() {
        let items = vec![WorkItem::feature("F1", 1), WorkItem::epic("F1", 5)];
        let errors = validate_input(&items, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("item")));
    }

    #[test]
    fn test_duplicate_team_name() {
        let teams = vec![Team::new("Team A", 10, 5), Team::new("Team A", 20, 5)];
        let errors = validate_input(&sample_items(), &teams).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("team")));
    }

    #[test]
    fn test_dangling_dependency() {
        let items = vec![WorkItem::feature("F1", 1).with_dependency("NONEXISTENT")];
        let errors = validate_input(&items, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DanglingDependency));
    }

    #[test]
    fn test_cyclic_dependency() {
        // F1 → F2 → F3 → F1
        let items = vec![
            WorkItem::feature("F1", 1).with_dependency("F3"),
            WorkItem::feature("F2", 1).with_dependency("F1"),
            WorkItem::feature("F3", 1).with_dependency("F2"),
        ];
        let errors = validate_input(&items, &sample_teams()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CyclicDependency);
        assert!(errors[0].message.contains("F1"));
    }

    #[test]
    fn test_self_dependency_is_cycle() {
        let items = vec![WorkItem::feature("F1", 1).with_dependency("F1")];
        let errors = validate_input(&items, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_multiple_errors() {
        let items = vec![
            WorkItem::feature("F1", 1).with_dependency("GHOST"),
            WorkItem::feature("F1", 2),
        ];
        let errors = validate_input(&items, &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
