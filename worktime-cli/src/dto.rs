use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use time::{Date, Duration, PrimitiveDateTime};
use worktime::domain::models::{
    Activity, AgreementTerm, AnnualWorkSummary, Holiday, MonthlyBalance, MonthlyRoles,
    TimeSummary, User, Vacation, VacationState,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(
    iso_date_time,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IsoDate(#[serde(with = "iso_date")] pub Date);

// Requests

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub user: UserDto,
    #[serde(default, with = "iso_date::option")]
    pub date: Option<Date>,
    pub prior_summary: Option<AnnualWorkSummaryDto>,
    /// Defaults to the vacation days earned in the evaluated year.
    pub vacation_entitlement: Option<i32>,
    #[serde(default)]
    pub holidays: Vec<HolidayDto>,
    #[serde(default)]
    pub activities: Vec<ActivityDto>,
    #[serde(default)]
    pub previous_year_activities: Vec<ActivityDto>,
    #[serde(default)]
    pub vacations: Vec<VacationDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysFile {
    #[serde(default)]
    pub holidays: Vec<HolidayDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    #[serde(with = "iso_date")]
    pub hiring_date: Date,
    #[serde(default)]
    pub agreement_terms: Vec<AgreementTermDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementTermDto {
    #[serde(with = "iso_date")]
    pub effective_from: Date,
    pub annual_working_hours: i64,
    pub vacation_days: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayDto {
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[serde(with = "iso_date_time")]
    pub date: PrimitiveDateTime,
    pub duration_minutes: i64,
    pub project_role_id: i64,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationDto {
    #[serde_as(as = "DisplayFromStr")]
    pub state: VacationState,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    pub days: Vec<IsoDate>,
    #[serde(with = "iso_date")]
    pub charge_year: Date,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualWorkSummaryDto {
    pub year: i32,
    pub worked_minutes: i64,
    pub target_working_minutes: i64,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        dto.agreement_terms
            .into_iter()
            .fold(User::new(dto.id, dto.hiring_date), |user, term| {
                user.with_agreement_term(term.into())
            })
    }
}

impl From<AgreementTermDto> for AgreementTerm {
    fn from(dto: AgreementTermDto) -> Self {
        AgreementTerm {
            effective_from: dto.effective_from,
            annual_working_time: Duration::hours(dto.annual_working_hours),
            vacation_days: dto.vacation_days,
        }
    }
}

impl From<HolidayDto> for Holiday {
    fn from(dto: HolidayDto) -> Self {
        Holiday::new(dto.date, dto.description)
    }
}

impl From<ActivityDto> for Activity {
    fn from(dto: ActivityDto) -> Self {
        Activity::new(
            Duration::minutes(dto.duration_minutes),
            dto.date,
            dto.project_role_id,
        )
    }
}

impl From<VacationDto> for Vacation {
    fn from(dto: VacationDto) -> Self {
        Vacation {
            state: dto.state,
            start_date: dto.start_date,
            end_date: dto.end_date,
            days: dto.days.into_iter().map(|IsoDate(day)| day).collect(),
            charge_year: dto.charge_year,
        }
    }
}

impl From<AnnualWorkSummaryDto> for AnnualWorkSummary {
    fn from(dto: AnnualWorkSummaryDto) -> Self {
        AnnualWorkSummary::new(
            dto.year,
            Duration::minutes(dto.worked_minutes),
            Duration::minutes(dto.target_working_minutes),
        )
    }
}

// Responses, durations in whole minutes

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSummaryResponse {
    pub year: YearAnnualBalanceResponse,
    pub months: Vec<MonthlyBalanceResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearAnnualBalanceResponse {
    pub previous: PreviousAnnualBalanceResponse,
    pub current: AnnualBalanceResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualBalanceResponse {
    pub worked: i64,
    pub target: i64,
    pub not_requested_vacations: i64,
    pub balance: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousAnnualBalanceResponse {
    pub worked: i64,
    pub target: i64,
    pub balance: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalanceResponse {
    pub month: u8,
    pub workable: i64,
    pub worked: i64,
    pub recommended: i64,
    pub balance: i64,
    pub roles: Vec<MonthlyRolesResponse>,
    pub charged_vacations: i64,
    pub enjoyed_vacations: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRolesResponse {
    pub role_id: i64,
    pub minutes: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub year: i32,
    pub workable_days: usize,
    pub months: Vec<CalendarMonthResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonthResponse {
    pub month: u8,
    pub workable_days: usize,
    pub holidays: Vec<String>,
}

impl From<&TimeSummary> for TimeSummaryResponse {
    fn from(summary: &TimeSummary) -> Self {
        let previous = &summary.year.previous;
        let current = &summary.year.current;

        Self {
            year: YearAnnualBalanceResponse {
                previous: PreviousAnnualBalanceResponse {
                    worked: previous.worked.whole_minutes(),
                    target: previous.target.whole_minutes(),
                    balance: previous.balance.whole_minutes(),
                },
                current: AnnualBalanceResponse {
                    worked: current.worked.whole_minutes(),
                    target: current.target.whole_minutes(),
                    not_requested_vacations: current.not_requested_vacations.whole_minutes(),
                    balance: current.balance.whole_minutes(),
                },
            },
            months: summary
                .months
                .iter()
                .map(|(month, balance)| to_monthly_response(u8::from(month), balance))
                .collect(),
        }
    }
}

fn to_monthly_response(month: u8, balance: &MonthlyBalance) -> MonthlyBalanceResponse {
    MonthlyBalanceResponse {
        month,
        workable: balance.workable.whole_minutes(),
        worked: balance.worked.whole_minutes(),
        recommended: balance.recommended.whole_minutes(),
        balance: balance.balance.whole_minutes(),
        roles: balance.roles.iter().map(MonthlyRolesResponse::from).collect(),
        charged_vacations: balance.charged_vacations.whole_minutes(),
        enjoyed_vacations: balance.enjoyed_vacations.whole_minutes(),
    }
}

impl From<&MonthlyRoles> for MonthlyRolesResponse {
    fn from(roles: &MonthlyRoles) -> Self {
        Self {
            role_id: roles.role_id.as_i64(),
            minutes: roles.hours.whole_minutes(),
        }
    }
}
