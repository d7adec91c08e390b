use crate::month::Month;
use crate::yes_no::YesNo;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub type PersonId = i32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MembershipRole {
    is_member: Option<YesNo>,
    member_month: Option<Month>,
    member_year: Option<i32>,
    subscription_year: Option<i32>,
}

impl MembershipRole {
    pub fn new(
        is_member: Option<YesNo>,
        member_month: Option<Month>,
        member_year: Option<i32>,
        subscription_year: Option<i32>,
    ) -> Self {
        Self {
            is_member,
            member_month,
            member_year,
            subscription_year,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AthleteRole {
    is_athlete: Option<YesNo>,
    /// Registration number at the federation.
    eom_number: Option<String>,
    athlete_from_year: Option<i32>,
}

impl AthleteRole {
    pub fn new(
        is_athlete: Option<YesNo>,
        eom_number: Option<String>,
        athlete_from_year: Option<i32>,
    ) -> Self {
        Self {
            is_athlete,
            eom_number,
            athlete_from_year,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StudentRole {
    is_student: Option<YesNo>,
    student_period_month: Option<Month>,
    student_period_year: Option<i32>,
    student_university: Option<YesNo>,
}

impl StudentRole {
    pub fn new(
        is_student: Option<YesNo>,
        student_period_month: Option<Month>,
        student_period_year: Option<i32>,
        student_university: Option<YesNo>,
    ) -> Self {
        Self {
            is_student,
            student_period_month,
            student_period_year,
            student_university,
        }
    }
}

/// Someone who showed interest in the club without joining yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ProspectRole {
    is_interested: Option<YesNo>,
    interested_from_month: Option<Month>,
    interested_from_year: Option<i32>,
}

impl ProspectRole {
    pub fn new(
        is_interested: Option<YesNo>,
        interested_from_month: Option<Month>,
        interested_from_year: Option<i32>,
    ) -> Self {
        Self {
            is_interested,
            interested_from_month,
            interested_from_year,
        }
    }
}

/// Everything an operator can fill in about a person.
/// The four roles are independent: a person can hold any of them at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PersonDetails {
    last_name: Option<String>,
    first_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    membership: MembershipRole,
    athlete: AthleteRole,
    student: StudentRole,
    prospect: ProspectRole,
}

impl PersonDetails {
    pub fn new(
        last_name: Option<String>,
        first_name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            last_name,
            first_name,
            phone,
            email,
            ..Default::default()
        }
    }

    pub fn with_membership(mut self, membership: MembershipRole) -> Self {
        self.membership = membership;
        self
    }

    pub fn with_athlete(mut self, athlete: AthleteRole) -> Self {
        self.athlete = athlete;
        self
    }

    pub fn with_student(mut self, student: StudentRole) -> Self {
        self.student = student;
        self
    }

    pub fn with_prospect(mut self, prospect: ProspectRole) -> Self {
        self.prospect = prospect;
        self
    }

    pub fn full_name(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A stored person. Dereferences into its [PersonDetails].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Person {
    id: PersonId,
    created_at: NaiveDateTime,
    details: PersonDetails,
}

impl Person {
    pub fn new(id: PersonId, created_at: NaiveDateTime, details: PersonDetails) -> Self {
        Self {
            id,
            created_at,
            details,
        }
    }
}

impl Deref for Person {
    type Target = PersonDetails;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

/// How many people hold each role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoleCounts {
    members: usize,
    athletes: usize,
    students: usize,
    prospects: usize,
    total: usize,
}

impl From<&[Person]> for RoleCounts {
    fn from(people: &[Person]) -> Self {
        let count = |flag: fn(&Person) -> Option<YesNo>| {
            people
                .iter()
                .filter(|person| flag(person).is_some_and(|flag| flag.is_yes()))
                .count()
        };

        Self {
            members: count(|person| *person.membership().is_member()),
            athletes: count(|person| *person.athlete().is_athlete()),
            students: count(|person| *person.student().is_student()),
            prospects: count(|person| *person.prospect().is_interested()),
            total: people.len(),
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub fn creation_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    /// A member who is also an athlete.
    pub fn nikos_papas_details() -> PersonDetails {
        PersonDetails::new(
            Some("Papas".to_owned()),
            Some("Nikos".to_owned()),
            Some("6900000001".to_owned()),
            Some("n@x.com".to_owned()),
        )
        .with_membership(MembershipRole::new(
            Some(YesNo::Yes),
            Some(Month::September),
            Some(2020),
            Some(2025),
        ))
        .with_athlete(AthleteRole::new(
            Some(YesNo::Yes),
            Some("EOM-1234".to_owned()),
            Some(2019),
        ))
        .with_student(StudentRole::new(Some(YesNo::No), None, None, None))
        .with_prospect(ProspectRole::new(Some(YesNo::No), None, None))
    }

    /// A university student who is not a member.
    pub fn maria_georgiou_details() -> PersonDetails {
        PersonDetails::new(
            Some("Georgiou".to_owned()),
            Some("Maria".to_owned()),
            None,
            Some("maria@club.gr".to_owned()),
        )
        .with_membership(MembershipRole::new(Some(YesNo::No), None, None, None))
        .with_athlete(AthleteRole::new(Some(YesNo::No), None, None))
        .with_student(StudentRole::new(
            Some(YesNo::Yes),
            Some(Month::October),
            Some(2024),
            Some(YesNo::Yes),
        ))
        .with_prospect(ProspectRole::new(Some(YesNo::No), None, None))
    }

    /// A prospect who is also a (non university) student.
    pub fn eleni_nikolaou_details() -> PersonDetails {
        PersonDetails::new(
            Some("Nikolaou".to_owned()),
            Some("Eleni".to_owned()),
            Some("6900000003".to_owned()),
            None,
        )
        .with_membership(MembershipRole::new(Some(YesNo::No), None, None, None))
        .with_athlete(AthleteRole::new(Some(YesNo::No), None, None))
        .with_student(StudentRole::new(
            Some(YesNo::Yes),
            Some(Month::September),
            Some(2025),
            Some(YesNo::No),
        ))
        .with_prospect(ProspectRole::new(
            Some(YesNo::Yes),
            Some(Month::March),
            Some(2025),
        ))
    }

    /// A member holding every role at once.
    pub fn kostas_papadopoulos_details() -> PersonDetails {
        PersonDetails::new(
            Some("Papadopoulos".to_owned()),
            Some("Kostas".to_owned()),
            None,
            Some("KOSTAS@club.gr".to_owned()),
        )
        .with_membership(MembershipRole::new(
            Some(YesNo::Yes),
            Some(Month::January),
            Some(2024),
            Some(2025),
        ))
        .with_athlete(AthleteRole::new(
            Some(YesNo::Yes),
            Some("EOM-9876".to_owned()),
            Some(2024),
        ))
        .with_student(StudentRole::new(
            Some(YesNo::Yes),
            Some(Month::January),
            Some(2024),
            Some(YesNo::No),
        ))
        .with_prospect(ProspectRole::new(
            Some(YesNo::Yes),
            Some(Month::January),
            Some(2023),
        ))
    }

    pub fn snapshot() -> Vec<Person> {
        vec![
            Person::new(1, creation_date(), nikos_papas_details()),
            Person::new(2, creation_date(), maria_georgiou_details()),
            Person::new(3, creation_date(), eleni_nikolaou_details()),
            Person::new(4, creation_date(), kostas_papadopoulos_details()),
        ]
    }

    #[test]
    fn should_count_roles_independently() {
        let people = snapshot();

        let counts = RoleCounts::from(people.as_slice());

        assert_eq!(2, *counts.members());
        assert_eq!(2, *counts.athletes());
        assert_eq!(3, *counts.students());
        assert_eq!(2, *counts.prospects());
        assert_eq!(4, *counts.total());
    }

    #[test]
    fn should_count_nothing_on_empty_snapshot() {
        assert_eq!(RoleCounts::default(), RoleCounts::from(Vec::<Person>::new().as_slice()));
    }

    #[test]
    fn should_build_full_name() {
        assert_eq!("Nikos Papas", nikos_papas_details().full_name());
        assert_eq!(
            "Papas",
            PersonDetails::new(Some("Papas".to_owned()), Some(" ".to_owned()), None, None)
                .full_name()
        );
    }

    #[test]
    fn should_dereference_into_details() {
        let person = Person::new(42, creation_date(), nikos_papas_details());

        assert_eq!(&Some("Nikos".to_owned()), person.first_name());
        assert_eq!(&42, person.id());
    }
}
