use dto::filter_spec::FilterSpec;
use dto::person::Person;
use dto::yes_no::YesNo;
use std::collections::BTreeSet;

/// People meeting every criterion of `filter`, in the order they were given.
pub fn apply_filters(people: &[Person], filter: &FilterSpec) -> Vec<Person> {
    let filtered_people = people
        .iter()
        .filter(|person| matches_filter(person, filter))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "{} people out of {} match the filter",
        filtered_people.len(),
        people.len()
    );
    filtered_people
}

fn matches_filter(person: &Person, filter: &FilterSpec) -> bool {
    let membership = person.membership();
    let athlete = person.athlete();
    let student = person.student();
    let prospect = person.prospect();

    matches_flag(filter.is_member(), membership.is_member())
        && matches_flag(filter.is_athlete(), athlete.is_athlete())
        && matches_flag(filter.is_student(), student.is_student())
        && matches_flag(filter.is_interested(), prospect.is_interested())
        && matches_any(filter.member_months(), membership.member_month())
        && matches_any(filter.member_years(), membership.member_year())
        && matches_any(filter.subscription_years(), membership.subscription_year())
        && matches_any(filter.athlete_from_years(), athlete.athlete_from_year())
        && matches_any(
            filter.student_period_months(),
            student.student_period_month(),
        )
        && matches_any(filter.student_period_years(), student.student_period_year())
        && matches_any(filter.student_university(), student.student_university())
        && matches_text(
            filter.name_search(),
            [person.first_name(), person.last_name()],
        )
        && matches_text(filter.eom_number_search(), [athlete.eom_number()])
        && matches_text(filter.email_search(), [person.email()])
}

fn matches_flag(expected: &Option<YesNo>, value: &Option<YesNo>) -> bool {
    expected.is_none() || expected == value
}

/// An empty set of choices puts no constraint.
fn matches_any<T: Ord>(choices: &BTreeSet<T>, value: &Option<T>) -> bool {
    choices.is_empty() || value.as_ref().is_some_and(|value| choices.contains(value))
}

/// Case-insensitive search of `search` in any of `values`. A blank search matches everything.
fn matches_text<const N: usize>(search: &str, values: [&Option<String>; N]) -> bool {
    let search = search.trim().to_lowercase();
    if search.is_empty() {
        return true;
    }

    values
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&search))
}
