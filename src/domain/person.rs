//! Person records
//!
//! A person is one line of the tree file: a key, a name, and whatever else
//! the record keeper knows. Parent links are keys of other records; a link
//! that is simply absent means the parent is unknown.

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::id::PersonId;

/// Recorded sex of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns a display label
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// A person record from the tree file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Record key, unique within a tree file
    pub id: PersonId,

    /// Display name, as written in the record
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    /// Birth event, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<Event>,

    /// Death event, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<Event>,

    /// Key of the father's record, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<PersonId>,

    /// Key of the mother's record, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<PersonId>,
}

impl Person {
    /// Creates a minimal record with just a key and a name
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sex: None,
            birth: None,
            death: None,
            father: None,
            mother: None,
        }
    }

    /// Birth year, when the birth date carries one
    pub fn birth_year(&self) -> Option<i32> {
        self.birth.as_ref()?.date.as_ref()?.year()
    }

    /// Death year, when the death date carries one
    pub fn death_year(&self) -> Option<i32> {
        self.death.as_ref()?.date.as_ref()?.year()
    }

    /// Short lifespan summary for listings: `1880-1932`, `b. 1880`, `d. 1932`,
    /// or empty when neither year is known
    pub fn lifespan(&self) -> String {
        match (self.birth_year(), self.death_year()) {
            (Some(b), Some(d)) => format!("{}-{}", b, d),
            (Some(b), None) => format!("b. {}", b),
            (None, Some(d)) => format!("d. {}", d),
            (None, None) => String::new(),
        }
    }

    /// Returns true if either parent link is present
    pub fn has_parents(&self) -> bool {
        self.father.is_some() || self.mother.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventDate;

    fn key(s: &str) -> PersonId {
        PersonId::new(s).unwrap()
    }

    fn person_with_years(birth: Option<i32>, death: Option<i32>) -> Person {
        let mut person = Person::new(key("I1"), "Test Person");
        person.birth = birth.map(Event::in_year);
        person.death = death.map(Event::in_year);
        person
    }

    #[test]
    fn minimal_record() {
        let person = Person::new(key("I1"), "John Smith");
        assert_eq!(person.name, "John Smith");
        assert!(person.birth.is_none());
        assert!(person.death.is_none());
        assert!(!person.has_parents());
    }

    #[test]
    fn lifespan_variants() {
        assert_eq!(person_with_years(Some(1880), Some(1932)).lifespan(), "1880-1932");
        assert_eq!(person_with_years(Some(1880), None).lifespan(), "b. 1880");
        assert_eq!(person_with_years(None, Some(1932)).lifespan(), "d. 1932");
        assert_eq!(person_with_years(None, None).lifespan(), "");
    }

    #[test]
    fn lifespan_ignores_text_dates() {
        let mut person = Person::new(key("I1"), "Test");
        person.birth = Some(Event {
            date: Some(EventDate::Text("about 1850".into())),
            place: None,
        });
        assert_eq!(person.lifespan(), "");
    }

    #[test]
    fn serde_roundtrip() {
        let mut person = Person::new(key("I1"), "John Smith");
        person.sex = Some(Sex::Male);
        person.birth = Some(Event::in_year(1880).at("Boston"));
        person.father = Some(key("I2"));

        let json = serde_json::to_string(&person).unwrap();
        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, parsed);
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let person = Person::new(key("I1"), "John Smith");
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"id":"I1","name":"John Smith"}"#);
    }

    #[test]
    fn deserializes_full_record_line() {
        let line = r#"{"id":"I1","name":"John Smith","sex":"male","birth":{"date":"1880-05-12","place":"Boston"},"death":{"date":"1932"},"father":"I2","mother":"I3"}"#;
        let person: Person = serde_json::from_str(line).unwrap();

        assert_eq!(person.sex, Some(Sex::Male));
        assert_eq!(person.birth_year(), Some(1880));
        assert_eq!(person.death_year(), Some(1932));
        assert_eq!(person.father, Some(key("I2")));
        assert_eq!(person.mother, Some(key("I3")));
    }
}
