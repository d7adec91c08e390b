use crate::month::Month;
use crate::yes_no::YesNo;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Criteria an operator picked to narrow down the list of people.
///
/// Every criterion is optional:
/// - a `None` role flag, an empty set or a blank search text puts no constraint on the list;
/// - all the other criteria must be met at the same time.
///
/// [FilterSpec::default] is the state of a freshly reset filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FilterSpec {
    is_member: Option<YesNo>,
    is_athlete: Option<YesNo>,
    is_student: Option<YesNo>,
    is_interested: Option<YesNo>,

    member_months: BTreeSet<Month>,
    member_years: BTreeSet<i32>,
    subscription_years: BTreeSet<i32>,
    athlete_from_years: BTreeSet<i32>,
    student_period_months: BTreeSet<Month>,
    student_period_years: BTreeSet<i32>,
    student_university: BTreeSet<YesNo>,

    name_search: String,
    eom_number_search: String,
    email_search: String,
}

impl FilterSpec {
    pub fn with_is_member(mut self, is_member: Option<YesNo>) -> Self {
        self.is_member = is_member;
        self
    }

    pub fn with_is_athlete(mut self, is_athlete: Option<YesNo>) -> Self {
        self.is_athlete = is_athlete;
        self
    }

    pub fn with_is_student(mut self, is_student: Option<YesNo>) -> Self {
        self.is_student = is_student;
        self
    }

    pub fn with_is_interested(mut self, is_interested: Option<YesNo>) -> Self {
        self.is_interested = is_interested;
        self
    }

    pub fn with_member_months<I: IntoIterator<Item = Month>>(mut self, months: I) -> Self {
        self.member_months = months.into_iter().collect();
        self
    }

    pub fn with_member_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.member_years = years.into_iter().collect();
        self
    }

    pub fn with_subscription_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.subscription_years = years.into_iter().collect();
        self
    }

    pub fn with_athlete_from_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.athlete_from_years = years.into_iter().collect();
        self
    }

    pub fn with_student_period_months<I: IntoIterator<Item = Month>>(mut self, months: I) -> Self {
        self.student_period_months = months.into_iter().collect();
        self
    }

    pub fn with_student_period_years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.student_period_years = years.into_iter().collect();
        self
    }

    pub fn with_student_university<I: IntoIterator<Item = YesNo>>(mut self, answers: I) -> Self {
        self.student_university = answers.into_iter().collect();
        self
    }

    pub fn with_name_search(mut self, search: &str) -> Self {
        self.name_search = search.to_owned();
        self
    }

    pub fn with_eom_number_search(mut self, search: &str) -> Self {
        self.eom_number_search = search.to_owned();
        self
    }

    pub fn with_email_search(mut self, search: &str) -> Self {
        self.email_search = search.to_owned();
        self
    }
}
