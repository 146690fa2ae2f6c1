mod cli;
mod config;
mod dto;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use time::{Date, Month, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use worktime::{
    adapters::outbound::{ConfiguredProjectRoleChecker, InMemoryHolidayRepository},
    domain::{
        models::{
            Activity, AnnualWorkSummary, Calendar, DateInterval, Holiday, User, Vacation, MONTHS,
        },
        services::{CalendarFactory, TimeSummaryService, TimeWorkableService},
    },
};

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::dto::{
    CalendarMonthResponse, CalendarResponse, HolidaysFile, SummaryRequest, TimeSummaryResponse,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::read_config(&cli.config_dir).with_context(|| {
        format!(
            "Failed to read configuration from {}",
            cli.config_dir.display()
        )
    })?;

    match cli.command {
        Commands::Summary { input, date } => summary(&settings, &input, date),
        Commands::Calendar { input, year } => calendar(&input, year),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn summary(settings: &Settings, input: &Path, date: Option<Date>) -> Result<()> {
    let request: SummaryRequest = read_json(input)?;
    let date = date
        .or(request.date)
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let year = date.year();

    let user = User::from(request.user);
    let prior_summary = request
        .prior_summary
        .map(AnnualWorkSummary::from)
        .unwrap_or_else(|| AnnualWorkSummary::empty(year - 1));
    let holidays = holidays_between(
        request.holidays.into_iter().map(Holiday::from).collect(),
        DateInterval::new(
            DateInterval::of_year(year - 1)?.start(),
            DateInterval::of_year(year)?.end(),
        )?,
    )?;
    let vacations: Vec<Vacation> = request.vacations.into_iter().map(Vacation::from).collect();
    let activities: Vec<Activity> = request.activities.into_iter().map(Activity::from).collect();
    let previous_year_activities: Vec<Activity> = request
        .previous_year_activities
        .into_iter()
        .map(Activity::from)
        .collect();

    let requested_dates = requested_dates_in(&vacations, year);
    let charged_this_year = charged_to(&vacations, year);
    let vacation_entitlement = request.vacation_entitlement.unwrap_or_else(|| {
        TimeWorkableService::new().earned_vacations_since_hiring_date(&user, year)
    });

    let roles = ConfiguredProjectRoleChecker::new(settings.work_time.non_workable_roles());
    let service = TimeSummaryService::new(Arc::new(roles));

    tracing::info!(user_id = %user.id, %date, "computing time summary");
    let summary = service.get_time_summary_balance(
        date,
        &user,
        &prior_summary,
        &holidays,
        &requested_dates,
        &charged_this_year,
        vacation_entitlement,
        &activities,
        &previous_year_activities,
    )?;

    print_json(&TimeSummaryResponse::from(&summary))
}

/// Days of `year` covered by pending or accepted vacations.
fn requested_dates_in(vacations: &[Vacation], year: i32) -> Vec<Date> {
    vacations
        .iter()
        .filter(|vacation| vacation.is_requested())
        .flat_map(|vacation| vacation.days_in_year(year))
        .collect()
}

/// Vacations debited from the allowance of `year`, wherever their days fall.
fn charged_to(vacations: &[Vacation], year: i32) -> Vec<Vacation> {
    vacations
        .iter()
        .filter(|vacation| vacation.charge_year.year() == year)
        .cloned()
        .collect()
}

/// Holidays of `interval` out of everything listed in the request.
fn holidays_between(holidays: Vec<Holiday>, interval: DateInterval) -> Result<Vec<Holiday>> {
    let calendar = calendar_factory(holidays).create(interval)?;
    Ok(calendar.holidays().to_vec())
}

fn calendar_factory(holidays: Vec<Holiday>) -> CalendarFactory<InMemoryHolidayRepository> {
    CalendarFactory::new(Arc::new(InMemoryHolidayRepository::new(holidays)))
}

fn calendar(input: &Path, year: i32) -> Result<()> {
    let file: HolidaysFile = read_json(input)?;
    let holidays = file.holidays.into_iter().map(Holiday::from).collect();

    print_json(&calendar_response(holidays, year)?)
}

fn calendar_response(holidays: Vec<Holiday>, year: i32) -> Result<CalendarResponse> {
    let calendar = calendar_factory(holidays).create(DateInterval::of_year(year)?)?;
    let months = MONTHS
        .into_iter()
        .map(|month| month_response(&calendar, year, month))
        .collect::<Result<Vec<_>>>()?;

    Ok(CalendarResponse {
        year,
        workable_days: calendar.workable_days().len(),
        months,
    })
}

fn month_response(
    calendar: &Calendar,
    year: i32,
    month: Month,
) -> Result<CalendarMonthResponse> {
    let interval = DateInterval::of_month(year, month)?;
    let holidays = calendar
        .holidays()
        .iter()
        .filter(|holiday| interval.includes(holiday.day()))
        .map(|holiday| holiday.description.clone())
        .collect();

    Ok(CalendarMonthResponse {
        month: u8::from(month),
        workable_days: calendar.workable_days_in(&interval).len(),
        holidays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use worktime::domain::models::VacationState;

    const FIXTURE: &str = include_str!("../fixtures/summary-2022.json");

    fn fixture_vacations() -> Vec<Vacation> {
        let request: SummaryRequest = serde_json::from_str(FIXTURE).unwrap();
        request.vacations.into_iter().map(Vacation::from).collect()
    }

    #[test]
    fn requested_dates_stay_within_the_year() {
        let vacations = fixture_vacations();

        assert_eq!(
            requested_dates_in(&vacations, 2022),
            vec![date!(2022 - 01 - 10), date!(2022 - 01 - 11)]
        );
        assert_eq!(
            requested_dates_in(&vacations, 2023),
            vec![date!(2023 - 01 - 09), date!(2023 - 01 - 10)]
        );
    }

    #[test]
    fn charged_vacations_follow_the_charge_year() {
        let vacations = fixture_vacations();

        assert_eq!(charged_to(&vacations, 2022).len(), 2);
        assert!(charged_to(&vacations, 2023).is_empty());
    }

    #[test]
    fn rejected_vacations_are_not_requested() {
        let mut vacations = fixture_vacations();
        vacations[0].state = VacationState::Reject;

        assert!(requested_dates_in(&vacations, 2022).is_empty());
        assert_eq!(charged_to(&vacations, 2022).len(), 2);
    }

    #[test]
    fn calendar_lists_workable_days_and_holidays_per_month() {
        let file: HolidaysFile = serde_json::from_str(FIXTURE).unwrap();
        let holidays = file.holidays.into_iter().map(Holiday::from).collect();

        let response = calendar_response(holidays, 2022).unwrap();

        // 260 weekdays minus 8 weekday holidays.
        assert_eq!(response.workable_days, 252);
        assert_eq!(response.months.len(), 12);

        let january = &response.months[0];
        assert_eq!(january.month, 1);
        assert_eq!(january.workable_days, 20);
        assert_eq!(january.holidays, vec!["Epiphany".to_string()]);

        let december = &response.months[11];
        assert_eq!(december.workable_days, 20);
        assert_eq!(december.holidays.len(), 2);
    }
}
