//! Project role workability port (outbound).

use crate::domain::models::ProjectRoleId;

/// Decides whether time recorded against a project role counts as worked time.
pub trait ProjectRoleChecker: Send + Sync + 'static {
    fn is_workable(&self, role_id: ProjectRoleId) -> bool;
}

/// Treats every role as workable.
///
/// Used when no non-workable roles are configured.
impl ProjectRoleChecker for () {
    fn is_workable(&self, _role_id: ProjectRoleId) -> bool {
        true
    }
}
