use std::collections::HashSet;

use crate::domain::{models::ProjectRoleId, ports::outbound::ProjectRoleChecker};

/// Role checker driven by a configured list of non-workable role ids.
///
/// Absence and leave roles are typically listed here so their time does not
/// count as worked.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredProjectRoleChecker {
    non_workable: HashSet<ProjectRoleId>,
}

impl ConfiguredProjectRoleChecker {
    pub fn new(non_workable: impl IntoIterator<Item = ProjectRoleId>) -> Self {
        Self {
            non_workable: non_workable.into_iter().collect(),
        }
    }
}

impl ProjectRoleChecker for ConfiguredProjectRoleChecker {
    fn is_workable(&self, role_id: ProjectRoleId) -> bool {
        !self.non_workable.contains(&role_id)
    }
}
