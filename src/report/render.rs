//! Plain-text rendering of an ancestor walk
//!
//! One block per visited ancestor:
//!
//! ```text
//! 1. John Smith
//!   b. 12 May 1880, Boston, Massachusetts
//!   d. 3 January 1932
//! ```
//!
//! Missing events are simply skipped; a block may be the name line alone.

use std::io::Write;

use anyhow::{Context, Result};

use super::ahnentafel::{Ahnentafel, AncestorEntry};
use crate::domain::{Pedigree, Person};

/// Writes one report block for a visited ancestor
pub fn write_entry<W: Write>(out: &mut W, entry: &AncestorEntry<'_>) -> Result<()> {
    let person = entry.person;
    writeln!(out, "{}. {}", entry.ahnen, person.name).context("Failed to write report line")?;

    for (label, event) in [("b", &person.birth), ("d", &person.death)] {
        if let Some(event) = event {
            let text = event.long();
            if !text.is_empty() {
                writeln!(out, "  {}. {}", label, text)
                    .context("Failed to write report line")?;
            }
        }
    }

    Ok(())
}

/// Walks `root`'s ancestry and writes the whole report
///
/// Entries come out in breadth-first order; `generations`, when given,
/// bounds the depth. A walk error (dangling parent link, number overflow)
/// aborts the report mid-stream with the lines so far already written.
pub fn write_report<W: Write>(
    out: &mut W,
    pedigree: &Pedigree,
    root: &Person,
    generations: Option<u32>,
) -> Result<()> {
    let mut walk = Ahnentafel::new(pedigree, root);
    if let Some(cap) = generations {
        walk = walk.with_generation_cap(cap);
    }

    for entry in walk {
        let entry = entry?;
        write_entry(out, &entry)?;
    }

    out.flush().context("Failed to flush report")
}
