use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stored value of a field that applies to every domain.
pub const ALL_DOMAINS: &str = "Όλα";
/// Also understood as "every domain" when reading stored values.
const ALL_DOMAINS_ALIAS: &str = "ALL";
const DOMAIN_SEPARATOR: char = ',';

/// Section of a person's record a custom field is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "ΓΕΝΙΚΑ ΣΤΟΙΧΕΙΑ")]
    General,
    #[serde(rename = "ΜΕΛΟΣ")]
    Member,
    #[serde(rename = "ΑΘΛΗΤΗΣ")]
    Athlete,
    #[serde(rename = "ΜΑΘΗΤΗΣ")]
    Student,
    #[serde(rename = "ΕΝΔΙΑΦΕΡΟΜΕΝΟΣ")]
    Prospect,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::General,
        Domain::Member,
        Domain::Athlete,
        Domain::Student,
        Domain::Prospect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::General => "ΓΕΝΙΚΑ ΣΤΟΙΧΕΙΑ",
            Domain::Member => "ΜΕΛΟΣ",
            Domain::Athlete => "ΑΘΛΗΤΗΣ",
            Domain::Student => "ΜΑΘΗΤΗΣ",
            Domain::Prospect => "ΕΝΔΙΑΦΕΡΟΜΕΝΟΣ",
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Domain::ALL
            .into_iter()
            .find(|domain| domain.as_str() == trimmed)
            .ok_or_else(|| ParseError::UnknownDomain(s.to_owned()))
    }
}

/// Domains a custom field applies to.
/// Matching is done on whole tags: a tag never matches another one it happens to be part of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicableDomains {
    All,
    Only(BTreeSet<Domain>),
}

impl ApplicableDomains {
    /// No domain at all means every domain.
    pub fn from_domains<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let domains = domains.into_iter().collect::<BTreeSet<_>>();
        if domains.is_empty() {
            ApplicableDomains::All
        } else {
            ApplicableDomains::Only(domains)
        }
    }

    pub fn contains(&self, domain: Domain) -> bool {
        match self {
            ApplicableDomains::All => true,
            ApplicableDomains::Only(domains) => domains.contains(&domain),
        }
    }

    /// Storage representation: [ALL_DOMAINS] or the tags joined by commas.
    /// An empty set is stored as [ALL_DOMAINS].
    pub fn encode(&self) -> String {
        match self {
            ApplicableDomains::All => ALL_DOMAINS.to_owned(),
            ApplicableDomains::Only(domains) if domains.is_empty() => ALL_DOMAINS.to_owned(),
            ApplicableDomains::Only(domains) => domains
                .iter()
                .map(Domain::as_str)
                .collect::<Vec<_>>()
                .join(&DOMAIN_SEPARATOR.to_string()),
        }
    }

    /// Read a stored value back.
    /// Unknown tags are dropped and returned alongside so that the caller can report them.
    pub fn decode(value: &str) -> (Self, Vec<String>) {
        let value = value.trim();
        if value.is_empty() || value == ALL_DOMAINS || value.eq_ignore_ascii_case(ALL_DOMAINS_ALIAS)
        {
            return (ApplicableDomains::All, vec![]);
        }

        let mut domains = BTreeSet::new();
        let mut unknown_tags = vec![];
        for tag in value
            .split(DOMAIN_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
        {
            match tag.parse::<Domain>() {
                Ok(domain) => {
                    domains.insert(domain);
                }
                Err(_) => unknown_tags.push(tag.to_owned()),
            }
        }

        (ApplicableDomains::Only(domains), unknown_tags)
    }
}

impl Display for ApplicableDomains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{ALL_DOMAINS, ApplicableDomains, Domain};
    use parameterized::{ide, parameterized};
    use std::collections::BTreeSet;

    ide!();

    #[test]
    fn should_treat_no_domain_as_every_domain() {
        let domains = ApplicableDomains::from_domains(vec![]);

        assert_eq!(ApplicableDomains::All, domains);
        assert_eq!(ALL_DOMAINS, domains.encode());
        for domain in Domain::ALL {
            assert!(domains.contains(domain));
        }
    }

    #[test]
    fn should_store_empty_set_as_every_domain() {
        let domains = ApplicableDomains::Only(BTreeSet::new());

        assert_eq!(ALL_DOMAINS, domains.encode());
        assert_eq!(
            (ApplicableDomains::All, vec![]),
            ApplicableDomains::decode(&domains.encode())
        );
    }

    #[test]
    fn should_encode_domains_in_a_stable_order() {
        let domains = ApplicableDomains::from_domains(vec![Domain::Student, Domain::Member]);

        assert_eq!("ΜΕΛΟΣ,ΜΑΘΗΤΗΣ", domains.encode());
    }

    #[parameterized(
        value = {"Όλα", "ALL", "all", "ΜΕΛΟΣ", "ΜΕΛΟΣ,ΑΘΛΗΤΗΣ", " ΜΕΛΟΣ , ΑΘΛΗΤΗΣ ", ""},
        expected_result = {
            ApplicableDomains::All,
            ApplicableDomains::All,
            ApplicableDomains::All,
            ApplicableDomains::Only(BTreeSet::from([Domain::Member])),
            ApplicableDomains::Only(BTreeSet::from([Domain::Member, Domain::Athlete])),
            ApplicableDomains::Only(BTreeSet::from([Domain::Member, Domain::Athlete])),
            ApplicableDomains::All,
        }
    )]
    fn should_decode(value: &str, expected_result: ApplicableDomains) {
        assert_eq!((expected_result, vec![]), ApplicableDomains::decode(value));
    }

    #[test]
    fn should_report_unknown_tags() {
        let (domains, unknown_tags) = ApplicableDomains::decode("ΜΕΛΟΣ,ΠΡΟΠΟΝΗΤΗΣ");

        assert_eq!(ApplicableDomains::Only(BTreeSet::from([Domain::Member])), domains);
        assert_eq!(vec!["ΠΡΟΠΟΝΗΤΗΣ".to_owned()], unknown_tags);
    }

    #[test]
    fn should_match_whole_tags_only() {
        let domains = ApplicableDomains::from_domains(vec![Domain::Athlete]);

        assert!(domains.contains(Domain::Athlete));
        assert!(!domains.contains(Domain::Student));
        assert!(!domains.contains(Domain::General));
    }
}
