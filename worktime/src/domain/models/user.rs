use time::{Date, Duration};

use super::UserId;

/// A dated working agreement, effective from `effective_from` until superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementTerm {
    pub effective_from: Date,
    pub annual_working_time: Duration,
    pub vacation_days: i32,
}

/// The agreement terms in force for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgreementYearTerms {
    pub annual_working_time: Duration,
    pub vacation_days: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub hiring_date: Date,
    pub agreement_terms: Vec<AgreementTerm>,
}

impl User {
    pub fn new(id: impl Into<UserId>, hiring_date: Date) -> Self {
        Self {
            id: id.into(),
            hiring_date,
            agreement_terms: Vec::new(),
        }
    }

    pub fn with_agreement_term(mut self, term: AgreementTerm) -> Self {
        self.agreement_terms.push(term);
        self
    }

    /// Terms of the most recent agreement effective in or before `year`.
    ///
    /// Users without such an agreement get zero working time and zero vacation days.
    pub fn agreement_terms_for_year(&self, year: i32) -> AgreementYearTerms {
        self.agreement_terms
            .iter()
            .filter(|term| term.effective_from.year() <= year)
            .max_by_key(|term| term.effective_from)
            .map(|term| AgreementYearTerms {
                annual_working_time: term.annual_working_time,
                vacation_days: term.vacation_days,
            })
            .unwrap_or_else(|| {
                tracing::debug!(user_id = %self.id, year, "no agreement term in force");
                AgreementYearTerms::default()
            })
    }
}
