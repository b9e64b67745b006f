//! Breadth-first ancestor numbering
//!
//! The ahnentafel scheme numbers the root person 1; the father of person N
//! is 2N and the mother is 2N+1. The walk keeps a FIFO queue of pending
//! (person, number) pairs: each step yields the front pair and enqueues the
//! person's known parents, so entries come out generation by generation.
//! The same individual reached through two lines of descent (pedigree
//! collapse) is yielded once per line, with distinct numbers.

use std::collections::VecDeque;

use crate::domain::{Pedigree, PedigreeError, Person, PersonId};

/// One visited ancestor and its ahnentafel number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AncestorEntry<'a> {
    pub person: &'a Person,
    pub ahnen: u64,
}

impl AncestorEntry<'_> {
    /// Generation index: 0 for the root, 1 for parents, and so on
    pub fn generation(&self) -> u32 {
        self.ahnen.ilog2()
    }
}

/// Lazy breadth-first walk over a person's ancestors
///
/// Yields `AncestorEntry` values in discovery order, root first. Numbers are
/// `u64`, which caps the walk at 63 generations; doubling is checked and a
/// deeper tree surfaces [`PedigreeError::NumberOverflow`] instead of
/// wrapping. The walk assumes the ancestry is acyclic — callers feeding it
/// unvalidated data should run [`Pedigree::check_ancestry`] first.
pub struct Ahnentafel<'a> {
    pedigree: &'a Pedigree,
    queue: VecDeque<(&'a Person, u64)>,
    max_generations: Option<u32>,
    pending_error: Option<PedigreeError>,
}

impl<'a> Ahnentafel<'a> {
    /// Starts a walk at `root`, unbounded in depth
    pub fn new(pedigree: &'a Pedigree, root: &'a Person) -> Self {
        Self {
            pedigree,
            queue: VecDeque::from([(root, 1)]),
            max_generations: None,
            pending_error: None,
        }
    }

    /// Stops the walk `generations` levels above the root
    ///
    /// A cap of 0 yields only the root; 1 adds the parents.
    pub fn with_generation_cap(mut self, generations: u32) -> Self {
        self.max_generations = Some(generations);
        self
    }

    fn push_parents(&mut self, person: &'a Person, ahnen: u64) -> Result<(), PedigreeError> {
        if let Some(cap) = self.max_generations {
            if ahnen.ilog2() >= cap {
                return Ok(());
            }
        }

        let doubled = |parent: &PersonId| {
            ahnen
                .checked_mul(2)
                .ok_or_else(|| PedigreeError::NumberOverflow(parent.clone()))
        };

        if let Some(father) = self.pedigree.father_of(person)? {
            self.queue.push_back((father, doubled(&father.id)?));
        }
        if let Some(mother) = self.pedigree.mother_of(person)? {
            // 2N is even, so 2N+1 cannot overflow once 2N fits
            self.queue.push_back((mother, doubled(&mother.id)? + 1));
        }

        Ok(())
    }
}

impl<'a> Iterator for Ahnentafel<'a> {
    type Item = Result<AncestorEntry<'a>, PedigreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.pending_error.take() {
            self.queue.clear();
            return Some(Err(error));
        }

        let (person, ahnen) = self.queue.pop_front()?;

        // Parents are enqueued as the entry is yielded, matching the order
        // in which a consumer printing the report would hit the failure.
        if let Err(error) = self.push_parents(person, ahnen) {
            self.pending_error = Some(error);
        }

        Some(Ok(AncestorEntry { person, ahnen }))
    }
}
