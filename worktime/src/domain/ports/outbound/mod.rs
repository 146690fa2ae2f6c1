mod holidays;
mod project_roles;

pub use holidays::*;
pub use project_roles::*;
