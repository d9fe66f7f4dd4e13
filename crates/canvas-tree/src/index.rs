//! Indexing of flat records into roots and parent → children lists.

use crate::error::TreeIssue;
use crate::record::ComponentRecord;
use std::collections::{HashMap, HashSet};

/// Lookup tables over one sequence of records.
///
/// Built in a single pass; roots and every children list keep input order.
/// Nothing is validated here: a child whose parent is absent is indexed but
/// unreachable from any root. See [`ComponentIndex::validate`].
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex<'a> {
    records: &'a [ComponentRecord],
    roots: Vec<&'a ComponentRecord>,
    nodes: HashMap<&'a str, &'a ComponentRecord>,
    children: HashMap<&'a str, Vec<&'a ComponentRecord>>,
}

impl<'a> ComponentIndex<'a> {
    pub fn build(records: &'a [ComponentRecord]) -> Self {
        let mut roots = Vec::new();
        let mut nodes = HashMap::with_capacity(records.len());
        let mut children: HashMap<&'a str, Vec<&'a ComponentRecord>> = HashMap::new();

        for record in records {
            nodes.insert(record.uuid.as_str(), record);
            match record.parent_uuid.as_deref() {
                None => roots.push(record),
                Some(parent) => children.entry(parent).or_default().push(record),
            }
        }

        ComponentIndex {
            records,
            roots,
            nodes,
            children,
        }
    }

    /// Records without a parent, in input order.
    pub fn roots(&self) -> &[&'a ComponentRecord] {
        &self.roots
    }

    /// Record registered under `uuid`. The last one wins on duplicates.
    pub fn get(&self, uuid: &str) -> Option<&'a ComponentRecord> {
        self.nodes.get(uuid).copied()
    }

    /// Children of `uuid` in input order; empty when it has none.
    pub fn children_of(&self, uuid: &str) -> &[&'a ComponentRecord] {
        self.children.get(uuid).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records reachable from a root, in render order (pre-order, roots
    /// first to last, children in input order).
    pub fn reachable(&self) -> Vec<&'a ComponentRecord> {
        let mut out = Vec::with_capacity(self.records.len());
        let mut seen = HashSet::new();
        let mut stack: Vec<&'a ComponentRecord> = self.roots.iter().rev().copied().collect();
        while let Some(record) = stack.pop() {
            // Duplicate ids can make a record its own descendant.
            if !seen.insert(record as *const ComponentRecord) {
                continue;
            }
            out.push(record);
            stack.extend(self.children_of(&record.uuid).iter().rev().copied());
        }
        out
    }

    /// Checks the forest invariants the renderer relies on.
    ///
    /// Issues are reported in input order. A record below a dangling parent
    /// is not reported itself; only the record holding the dangling
    /// reference is.
    pub fn validate(&self) -> Vec<TreeIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for record in self.records {
            let uuid = record.uuid.as_str();
            if !seen.insert(uuid) && reported.insert(uuid) {
                issues.push(TreeIssue::DuplicateUuid {
                    uuid: uuid.to_string(),
                });
            }
        }

        for record in self.records {
            if let Some(parent) = record.parent_uuid.as_deref() {
                if !self.nodes.contains_key(parent) {
                    issues.push(TreeIssue::MissingParent {
                        uuid: record.uuid.clone(),
                        parent_uuid: parent.to_string(),
                    });
                    continue;
                }
            }
            if self.ancestry_loops(record) {
                issues.push(TreeIssue::ParentCycle {
                    uuid: record.uuid.clone(),
                });
            }
        }

        issues
    }

    /// Walks up the parent chain; true if it revisits a record before
    /// reaching a root or a dangling parent.
    fn ancestry_loops(&self, record: &'a ComponentRecord) -> bool {
        let mut visited = HashSet::new();
        let mut current = record;
        loop {
            if !visited.insert(current.uuid.as_str()) {
                return true;
            }
            let Some(parent) = current.parent_uuid.as_deref() else {
                return false;
            };
            match self.nodes.get(parent) {
                Some(&next) => current = next,
                None => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuids(records: &[&ComponentRecord]) -> Vec<String> {
        records.iter().map(|r| r.uuid.clone()).collect()
    }

    #[test]
    fn roots_and_children_keep_input_order() {
        let records = vec![
            ComponentRecord::new("c1", "x").with_parent("r1"),
            ComponentRecord::new("r1", "x"),
            ComponentRecord::new("r2", "x"),
            ComponentRecord::new("c2", "x").with_parent("r1"),
            ComponentRecord::new("c3", "x").with_parent("r1").with_slot("footer"),
        ];
        let index = ComponentIndex::build(&records);
        assert_eq!(uuids(index.roots()), vec!["r1", "r2"]);
        assert_eq!(uuids(index.children_of("r1")), vec!["c1", "c2", "c3"]);
        assert!(index.children_of("r2").is_empty());
        assert_eq!(index.get("c2").map(|r| r.uuid.as_str()), Some("c2"));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn orphans_are_indexed_but_unreachable() {
        let records = vec![
            ComponentRecord::new("r", "x"),
            ComponentRecord::new("o", "x").with_parent("missing"),
            ComponentRecord::new("oc", "x").with_parent("o"),
        ];
        let index = ComponentIndex::build(&records);
        assert!(index.get("o").is_some());
        assert_eq!(uuids(&index.reachable()), vec!["r"]);
    }

    #[test]
    fn reachable_is_preorder() {
        let records = vec![
            ComponentRecord::new("a", "x"),
            ComponentRecord::new("b", "x"),
            ComponentRecord::new("a1", "x").with_parent("a"),
            ComponentRecord::new("a1a", "x").with_parent("a1"),
            ComponentRecord::new("a2", "x").with_parent("a"),
        ];
        let index = ComponentIndex::build(&records);
        assert_eq!(uuids(&index.reachable()), vec!["a", "a1", "a1a", "a2", "b"]);
    }

    #[test]
    fn duplicates_last_wins() {
        let records = vec![
            ComponentRecord::new("a", "first"),
            ComponentRecord::new("a", "second"),
        ];
        let index = ComponentIndex::build(&records);
        assert_eq!(index.get("a").map(|r| r.component_id.as_str()), Some("second"));
    }

    #[test]
    fn well_formed_forest_validates() {
        let records = vec![
            ComponentRecord::new("a", "x"),
            ComponentRecord::new("b", "x").with_parent("a"),
        ];
        assert!(ComponentIndex::build(&records).validate().is_empty());
    }

    #[test]
    fn validate_reports_every_issue_kind() {
        let records = vec![
            ComponentRecord::new("a", "x"),
            ComponentRecord::new("a", "x"),
            ComponentRecord::new("a", "x"),
            ComponentRecord::new("o", "x").with_parent("ghost"),
            ComponentRecord::new("below-orphan", "x").with_parent("o"),
            ComponentRecord::new("p", "x").with_parent("q"),
            ComponentRecord::new("q", "x").with_parent("p"),
        ];
        let issues = ComponentIndex::build(&records).validate();
        assert_eq!(
            issues,
            vec![
                TreeIssue::DuplicateUuid { uuid: "a".into() },
                TreeIssue::MissingParent {
                    uuid: "o".into(),
                    parent_uuid: "ghost".into(),
                },
                TreeIssue::ParentCycle { uuid: "p".into() },
                TreeIssue::ParentCycle { uuid: "q".into() },
            ]
        );
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let records = vec![ComponentRecord::new("s", "x").with_parent("s")];
        let issues = ComponentIndex::build(&records).validate();
        assert_eq!(issues, vec![TreeIssue::ParentCycle { uuid: "s".into() }]);
    }
}
