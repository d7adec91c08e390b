use crate::database::error::DatabaseError;
use crate::database::model::parse_optional;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use dto::person::{AthleteRole, MembershipRole, PersonDetails, ProspectRole, StudentRole};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::people)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Person {
    id: i32,
    last_name: Option<String>,
    first_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    is_member: Option<String>,
    member_month: Option<String>,
    member_year: Option<i32>,
    subscription_year: Option<i32>,
    is_athlete: Option<String>,
    eom_number: Option<String>,
    athlete_from_year: Option<i32>,
    is_student: Option<String>,
    student_period_month: Option<String>,
    student_period_year: Option<i32>,
    student_university: Option<String>,
    is_interested: Option<String>,
    interested_from_month: Option<String>,
    interested_from_year: Option<i32>,
    created_at: NaiveDateTime,
}

impl TryFrom<Person> for dto::person::Person {
    type Error = DatabaseError;

    fn try_from(value: Person) -> Result<Self, Self::Error> {
        let details = PersonDetails::new(
            value.last_name,
            value.first_name,
            value.phone,
            value.email,
        )
        .with_membership(MembershipRole::new(
            parse_optional(value.is_member)?,
            parse_optional(value.member_month)?,
            value.member_year,
            value.subscription_year,
        ))
        .with_athlete(AthleteRole::new(
            parse_optional(value.is_athlete)?,
            value.eom_number,
            value.athlete_from_year,
        ))
        .with_student(StudentRole::new(
            parse_optional(value.is_student)?,
            parse_optional(value.student_period_month)?,
            value.student_period_year,
            parse_optional(value.student_university)?,
        ))
        .with_prospect(ProspectRole::new(
            parse_optional(value.is_interested)?,
            parse_optional(value.interested_from_month)?,
            value.interested_from_year,
        ));

        Ok(dto::person::Person::new(value.id, value.created_at, details))
    }
}

/// Columns an operator can write. `id` and `created_at` are left to the database.
#[derive(Insertable, AsChangeset, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::people)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub(crate) struct NewPerson {
    last_name: Option<String>,
    first_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    is_member: Option<String>,
    member_month: Option<String>,
    member_year: Option<i32>,
    subscription_year: Option<i32>,
    is_athlete: Option<String>,
    eom_number: Option<String>,
    athlete_from_year: Option<i32>,
    is_student: Option<String>,
    student_period_month: Option<String>,
    student_period_year: Option<i32>,
    student_university: Option<String>,
    is_interested: Option<String>,
    interested_from_month: Option<String>,
    interested_from_year: Option<i32>,
}

impl From<&PersonDetails> for NewPerson {
    fn from(details: &PersonDetails) -> Self {
        let membership = details.membership();
        let athlete = details.athlete();
        let student = details.student();
        let prospect = details.prospect();

        Self {
            last_name: details.last_name().clone(),
            first_name: details.first_name().clone(),
            phone: details.phone().clone(),
            email: details.email().clone(),
            is_member: membership.is_member().map(|flag| flag.to_string()),
            member_month: membership.member_month().map(|month| month.to_string()),
            member_year: *membership.member_year(),
            subscription_year: *membership.subscription_year(),
            is_athlete: athlete.is_athlete().map(|flag| flag.to_string()),
            eom_number: athlete.eom_number().clone(),
            athlete_from_year: *athlete.athlete_from_year(),
            is_student: student.is_student().map(|flag| flag.to_string()),
            student_period_month: student.student_period_month().map(|month| month.to_string()),
            student_period_year: *student.student_period_year(),
            student_university: student.student_university().map(|flag| flag.to_string()),
            is_interested: prospect.is_interested().map(|flag| flag.to_string()),
            interested_from_month: prospect
                .interested_from_month()
                .map(|month| month.to_string()),
            interested_from_year: *prospect.interested_from_year(),
        }
    }
}
