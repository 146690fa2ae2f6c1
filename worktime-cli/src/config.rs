use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_with::{formats::CommaSeparator, serde_as, StringWithSeparator};
use strum::{Display, EnumString};
use worktime::domain::models::ProjectRoleId;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub work_time: WorkTimeSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct WorkTimeSettings {
    /// Roles whose activities do not count as worked time, e.g. "12,13".
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, i64>")]
    #[serde(default)]
    pub non_workable_role_ids: Vec<i64>,
}

impl WorkTimeSettings {
    pub fn non_workable_roles(&self) -> impl Iterator<Item = ProjectRoleId> + '_ {
        self.non_workable_role_ids.iter().copied().map(ProjectRoleId::new)
    }
}

pub fn read_config(config_directory: &Path) -> Result<Settings, config::ConfigError> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    let environment = Environment::from_str(&environment).map_err(|_| {
        config::ConfigError::Message(format!("Unknown APP_ENVIRONMENT: {environment}"))
    })?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("WORKTIME")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_from(yaml: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn reads_comma_separated_role_ids() {
        let settings = settings_from("work_time:\n  non_workable_role_ids: \"3,12\"\n");
        let roles: Vec<_> = settings.work_time.non_workable_roles().collect();

        assert_eq!(roles, vec![ProjectRoleId::new(3), ProjectRoleId::new(12)]);
    }

    #[test]
    fn empty_role_list_is_allowed() {
        let settings = settings_from("work_time:\n  non_workable_role_ids: \"\"\n");
        assert!(settings.work_time.non_workable_role_ids.is_empty());
    }

    #[test]
    fn environment_names_are_case_insensitive() {
        assert!(matches!(Environment::from_str("Production"), Ok(Environment::Production)));
        assert!(Environment::from_str("staging").is_err());
    }
}
