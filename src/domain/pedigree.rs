//! The person-graph provider
//!
//! A `Pedigree` holds every record of a tree file, resolves father/mother
//! links, and answers "who is this?" queries for root selection. Parent
//! links form a directed graph; `validate` and `check_ancestry` use petgraph
//! to find link cycles, which a well-formed genealogy never has but a
//! hand-edited record file can.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use thiserror::Error;

use super::id::PersonId;
use super::person::Person;

#[derive(Debug, Error, PartialEq)]
pub enum PedigreeError {
    #[error("Duplicate person key in tree: {0}")]
    DuplicateId(PersonId),

    #[error("No person matches '{0}'")]
    UnknownPerson(String),

    #[error("'{name}' matches {matches} people; use a key instead")]
    AmbiguousName { name: String, matches: usize },

    #[error("Record {child} names parent {parent}, but no such record exists")]
    MissingRecord { child: PersonId, parent: PersonId },

    #[error("{0} appears in a parent-link cycle")]
    AncestryCycle(PersonId),

    #[error("Ancestor number overflow at {0}: more than 63 generations")]
    NumberOverflow(PersonId),
}

/// A parent link that points at no record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DanglingLink {
    pub child: PersonId,
    pub parent: PersonId,
}

/// Outcome of a full-tree check
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Parent links pointing at missing records, sorted by child key
    pub dangling: Vec<DanglingLink>,

    /// Parent-link cycles, each a sorted list of the member keys
    pub cycles: Vec<Vec<PersonId>>,
}

impl ValidationReport {
    /// Returns true when the tree has no problems
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }

    /// Total number of problems found
    pub fn problem_count(&self) -> usize {
        self.dangling.len() + self.cycles.len()
    }
}

/// All records of a tree file, keyed for traversal
#[derive(Debug, Default)]
pub struct Pedigree {
    persons: HashMap<PersonId, Person>,
}

impl Pedigree {
    /// Builds a pedigree, rejecting duplicate keys
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self, PedigreeError> {
        let mut map = HashMap::new();
        for person in persons {
            if let Some(previous) = map.insert(person.id.clone(), person) {
                return Err(PedigreeError::DuplicateId(previous.id));
            }
        }
        Ok(Self { persons: map })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns true if there are no records
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Looks up a record by key
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.persons.get(id)
    }

    /// Iterates over all records in no particular order
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// All records sorted by key, for stable listings
    pub fn sorted_persons(&self) -> Vec<&Person> {
        let mut all: Vec<&Person> = self.persons.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Resolves a person's father link
    ///
    /// `Ok(None)` means the father is unknown; a link to a missing record is
    /// an error, distinguishable from a normal absent parent.
    pub fn father_of(&self, person: &Person) -> Result<Option<&Person>, PedigreeError> {
        self.resolve_parent(person, person.father.as_ref())
    }

    /// Resolves a person's mother link
    pub fn mother_of(&self, person: &Person) -> Result<Option<&Person>, PedigreeError> {
        self.resolve_parent(person, person.mother.as_ref())
    }

    fn resolve_parent<'a>(
        &'a self,
        child: &Person,
        link: Option<&PersonId>,
    ) -> Result<Option<&'a Person>, PedigreeError> {
        match link {
            None => Ok(None),
            Some(id) => self
                .persons
                .get(id)
                .map(Some)
                .ok_or_else(|| PedigreeError::MissingRecord {
                    child: child.id.clone(),
                    parent: id.clone(),
                }),
        }
    }

    /// Case-insensitive substring search over names, sorted by key
    pub fn find_by_name(&self, query: &str) -> Vec<&Person> {
        let needle = query.to_lowercase();
        let mut matches: Vec<&Person> = self
            .persons
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    /// Selects one person by key or name
    ///
    /// An exact key wins outright. Otherwise the query must match exactly one
    /// name (full name first, substring as a fallback); zero or several
    /// matches are selection errors, reported before any output is produced.
    pub fn select(&self, query: &str) -> Result<&Person, PedigreeError> {
        if let Ok(id) = query.parse::<PersonId>() {
            if let Some(person) = self.persons.get(&id) {
                return Ok(person);
            }
        }

        let needle = query.to_lowercase();
        let mut matches: Vec<&Person> = self
            .persons
            .values()
            .filter(|p| p.name.to_lowercase() == needle)
            .collect();
        if matches.is_empty() {
            matches = self.find_by_name(query);
        }

        match matches.as_slice() {
            [] => Err(PedigreeError::UnknownPerson(query.to_string())),
            [person] => Ok(*person),
            many => Err(PedigreeError::AmbiguousName {
                name: query.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Fails if the root's ancestry contains a parent-link cycle
    ///
    /// The numbered walk assumes acyclic input to terminate, so the report
    /// path runs this first. Uses a plain visited-set walk (which tolerates
    /// cycles and pedigree collapse) to find the reachable records, then a
    /// cycle check over that subgraph.
    pub fn check_ancestry(&self, root: &Person) -> Result<(), PedigreeError> {
        let reachable = self.ancestry_ids(root);
        let cycles = self.cycles_among(&reachable);
        match cycles.into_iter().flatten().next() {
            Some(member) => Err(PedigreeError::AncestryCycle(member)),
            None => Ok(()),
        }
    }

    /// Checks the whole tree: dangling parent links and link cycles
    pub fn validate(&self) -> ValidationReport {
        let mut dangling = Vec::new();
        for person in self.persons.values() {
            for parent in [&person.father, &person.mother].into_iter().flatten() {
                if !self.persons.contains_key(parent) {
                    dangling.push(DanglingLink {
                        child: person.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        dangling.sort();

        let all: HashSet<PersonId> = self.persons.keys().cloned().collect();
        let cycles = self.cycles_among(&all);

        ValidationReport { dangling, cycles }
    }

    /// Keys of every record reachable from `root` through parent links
    fn ancestry_ids(&self, root: &Person) -> HashSet<PersonId> {
        let mut visited: HashSet<PersonId> = HashSet::from([root.id.clone()]);
        let mut queue: VecDeque<&Person> = VecDeque::from([root]);

        while let Some(person) = queue.pop_front() {
            for link in [&person.father, &person.mother].into_iter().flatten() {
                if let Some(parent) = self.persons.get(link) {
                    if visited.insert(parent.id.clone()) {
                        queue.push_back(parent);
                    }
                }
            }
        }

        visited
    }

    /// Parent-link cycles among the given records, each as a sorted key list
    fn cycles_among(&self, ids: &HashSet<PersonId>) -> Vec<Vec<PersonId>> {
        let mut graph: DiGraph<PersonId, ()> = DiGraph::new();
        let mut nodes: HashMap<&PersonId, NodeIndex> = HashMap::new();

        for id in ids {
            nodes.insert(id, graph.add_node(id.clone()));
        }

        // Edge direction: child -> parent. Dangling links get no edge; they
        // are reported separately.
        for id in ids {
            let Some(person) = self.persons.get(id) else {
                continue;
            };
            for parent in [&person.father, &person.mother].into_iter().flatten() {
                if let (Some(&from), Some(&to)) = (nodes.get(&person.id), nodes.get(parent)) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        let mut cycles: Vec<Vec<PersonId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1
                    || scc
                        .first()
                        .is_some_and(|&n| graph.find_edge(n, n).is_some())
            })
            .map(|scc| {
                let mut members: Vec<PersonId> =
                    scc.into_iter().map(|n| graph[n].clone()).collect();
                members.sort();
                members
            })
            .collect();

        cycles.sort();
        cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> PersonId {
        PersonId::new(s).unwrap()
    }

    fn person(id: &str, name: &str) -> Person {
        Person::new(key(id), name)
    }

    fn child_of(id: &str, name: &str, father: Option<&str>, mother: Option<&str>) -> Person {
        let mut p = person(id, name);
        p.father = father.map(key);
        p.mother = mother.map(key);
        p
    }

    /// Root I1 with parents I2/I3 and paternal grandparents I4/I5
    fn sample_tree() -> Pedigree {
        Pedigree::from_persons([
            child_of("I1", "John Smith", Some("I2"), Some("I3")),
            child_of("I2", "William Smith", Some("I4"), Some("I5")),
            person("I3", "Mary Jones"),
            person("I4", "Thomas Smith"),
            person("I5", "Ann Brown"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = Pedigree::from_persons([person("I1", "First"), person("I1", "Second")]);
        assert_eq!(result.unwrap_err(), PedigreeError::DuplicateId(key("I1")));
    }

    #[test]
    fn resolves_parents() {
        let tree = sample_tree();
        let root = tree.get(&key("I1")).unwrap();

        let father = tree.father_of(root).unwrap().unwrap();
        assert_eq!(father.name, "William Smith");

        let mother = tree.mother_of(root).unwrap().unwrap();
        assert_eq!(mother.name, "Mary Jones");
    }

    #[test]
    fn absent_parent_is_not_an_error() {
        let tree = sample_tree();
        let mother = tree.get(&key("I3")).unwrap();

        assert_eq!(tree.father_of(mother).unwrap(), None);
        assert_eq!(tree.mother_of(mother).unwrap(), None);
    }

    #[test]
    fn dangling_parent_link_is_an_error() {
        let tree =
            Pedigree::from_persons([child_of("I1", "John", Some("missing"), None)]).unwrap();
        let root = tree.get(&key("I1")).unwrap();

        assert_eq!(
            tree.father_of(root).unwrap_err(),
            PedigreeError::MissingRecord {
                child: key("I1"),
                parent: key("missing"),
            }
        );
    }

    #[test]
    fn select_by_key() {
        let tree = sample_tree();
        assert_eq!(tree.select("I3").unwrap().name, "Mary Jones");
    }

    #[test]
    fn select_by_full_name_ignores_case() {
        let tree = sample_tree();
        assert_eq!(tree.select("mary jones").unwrap().id, key("I3"));
    }

    #[test]
    fn select_by_unique_substring() {
        let tree = sample_tree();
        assert_eq!(tree.select("Jones").unwrap().id, key("I3"));
    }

    #[test]
    fn select_unknown_person() {
        let tree = sample_tree();
        assert_eq!(
            tree.select("nobody").unwrap_err(),
            PedigreeError::UnknownPerson("nobody".to_string())
        );
    }

    #[test]
    fn select_ambiguous_name() {
        let tree = sample_tree();
        assert_eq!(
            tree.select("Smith").unwrap_err(),
            PedigreeError::AmbiguousName {
                name: "Smith".to_string(),
                matches: 3,
            }
        );
    }

    #[test]
    fn full_name_match_beats_substring_matches() {
        // "Ann Brown" is also a substring of "Ann Browning"; the exact
        // full-name match must still win.
        let tree = Pedigree::from_persons([
            person("I1", "Ann Brown"),
            person("I2", "Ann Browning"),
        ])
        .unwrap();
        assert_eq!(tree.select("Ann Brown").unwrap().id, key("I1"));
    }

    #[test]
    fn validate_clean_tree() {
        let report = sample_tree().validate();
        assert!(report.is_clean());
        assert_eq!(report.problem_count(), 0);
    }

    #[test]
    fn validate_reports_dangling_links() {
        let tree = Pedigree::from_persons([
            child_of("I1", "John", Some("gone"), Some("I2")),
            person("I2", "Mary"),
        ])
        .unwrap();

        let report = tree.validate();
        assert_eq!(
            report.dangling,
            vec![DanglingLink {
                child: key("I1"),
                parent: key("gone"),
            }]
        );
        assert!(report.cycles.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn validate_reports_self_parent() {
        let tree =
            Pedigree::from_persons([child_of("I1", "Ouroboros", Some("I1"), None)]).unwrap();

        let report = tree.validate();
        assert_eq!(report.cycles, vec![vec![key("I1")]]);
    }

    #[test]
    fn validate_reports_longer_cycle() {
        let tree = Pedigree::from_persons([
            child_of("I1", "A", Some("I2"), None),
            child_of("I2", "B", Some("I3"), None),
            child_of("I3", "C", Some("I1"), None),
        ])
        .unwrap();

        let report = tree.validate();
        assert_eq!(report.cycles, vec![vec![key("I1"), key("I2"), key("I3")]]);
    }

    #[test]
    fn pedigree_collapse_is_not_a_cycle() {
        // Both parents share the same father: a diamond, not a cycle.
        let tree = Pedigree::from_persons([
            child_of("I1", "Child", Some("I2"), Some("I3")),
            child_of("I2", "Father", Some("I4"), None),
            child_of("I3", "Mother", Some("I4"), None),
            person("I4", "Shared Grandfather"),
        ])
        .unwrap();

        assert!(tree.validate().is_clean());
        let root = tree.get(&key("I1")).unwrap();
        assert!(tree.check_ancestry(root).is_ok());
    }

    #[test]
    fn check_ancestry_finds_cycle_above_root() {
        let tree = Pedigree::from_persons([
            child_of("I1", "Child", Some("I2"), None),
            child_of("I2", "Father", Some("I3"), None),
            child_of("I3", "Grandfather", Some("I2"), None),
        ])
        .unwrap();

        let root = tree.get(&key("I1")).unwrap();
        assert!(matches!(
            tree.check_ancestry(root),
            Err(PedigreeError::AncestryCycle(_))
        ));
    }

    #[test]
    fn check_ancestry_ignores_cycles_elsewhere() {
        // A cycle in an unrelated family must not block this root's report.
        let tree = Pedigree::from_persons([
            person("I1", "Loner"),
            child_of("X1", "A", Some("X2"), None),
            child_of("X2", "B", Some("X1"), None),
        ])
        .unwrap();

        let root = tree.get(&key("I1")).unwrap();
        assert!(tree.check_ancestry(root).is_ok());
        assert_eq!(tree.validate().cycles.len(), 1);
    }

    #[test]
    fn sorted_persons_orders_by_key() {
        let tree = sample_tree();
        let keys: Vec<&str> = tree.sorted_persons().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(keys, vec!["I1", "I2", "I3", "I4", "I5"]);
    }
}
