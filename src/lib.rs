//! Ahnen - Ahnentafel reports from a local family-tree file
//!
//! A tree file holds one person record per line; `report` walks a person's
//! ancestry breadth-first and numbers each ancestor in the classic
//! ahnentafel scheme (root 1, father of N at 2N, mother at 2N+1).

pub mod cli;
pub mod domain;
pub mod report;
pub mod storage;

pub use domain::{Event, EventDate, Pedigree, PedigreeError, Person, PersonId, Sex};
pub use report::{Ahnentafel, AncestorEntry};
