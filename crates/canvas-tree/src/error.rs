use thiserror::Error;

/// A structural problem in a record set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeIssue {
    #[error("duplicate uuid {uuid}")]
    DuplicateUuid { uuid: String },

    #[error("component {uuid} references missing parent {parent_uuid}")]
    MissingParent { uuid: String, parent_uuid: String },

    #[error("component {uuid} has a cyclic parent chain")]
    ParentCycle { uuid: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Component type {component_id} not found")]
    ComponentNotFound { component_id: String },

    #[error("invalid component tree: {}", join_issues(.0))]
    InvalidTree(Vec<TreeIssue>),
}

fn join_issues(issues: &[TreeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
