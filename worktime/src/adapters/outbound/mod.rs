mod configured_roles;
mod in_memory_holidays;

pub use configured_roles::ConfiguredProjectRoleChecker;
pub use in_memory_holidays::InMemoryHolidayRepository;
