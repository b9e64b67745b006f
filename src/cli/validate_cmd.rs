//! Tree checking command
//!
//! Reports problems the walker and the record keeper care about: parent
//! links that point at no record, and parent-link cycles. Exits non-zero
//! when anything is found.

use anyhow::{bail, Result};

use super::output::Output;
use crate::storage::PersonStore;

/// Checks the whole tree file
pub fn run(output: &Output, store: &PersonStore) -> Result<()> {
    let pedigree = store.read_pedigree()?;
    let report = pedigree.validate();

    if output.is_json() {
        output.data(&report);
    } else if report.is_clean() {
        println!("Tree is clean: {} records checked.", pedigree.len());
    } else {
        for link in &report.dangling {
            println!(
                "dangling link: {} names parent {}, but no such record exists",
                link.child, link.parent
            );
        }
        for cycle in &report.cycles {
            let members: Vec<String> = cycle.iter().map(|id| id.to_string()).collect();
            println!("parent-link cycle: {}", members.join(" -> "));
        }
    }

    if !report.is_clean() {
        bail!(
            "Found {} problem(s) in {}",
            report.problem_count(),
            store.path().display()
        );
    }

    Ok(())
}
