use time::{Duration, PrimitiveDateTime};

use super::ProjectRoleId;

/// Time a user recorded against a project role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub duration: Duration,
    pub date: PrimitiveDateTime,
    pub project_role_id: ProjectRoleId,
}

impl Activity {
    pub fn new(
        duration: Duration,
        date: PrimitiveDateTime,
        project_role_id: impl Into<ProjectRoleId>,
    ) -> Self {
        Self {
            duration,
            date,
            project_role_id: project_role_id.into(),
        }
    }
}
