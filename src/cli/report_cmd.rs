//! The ahnentafel report command

use std::io;

use anyhow::Result;

use super::output::Output;
use crate::report::{write_report, Ahnentafel};
use crate::storage::PersonStore;

/// Prints the ancestor report for the selected person
pub fn run(
    output: &Output,
    store: &PersonStore,
    person: &str,
    generations: Option<u32>,
) -> Result<()> {
    let pedigree = store.read_pedigree()?;
    output.verbose_ctx("report", &format!("Loaded {} records", pedigree.len()));

    let root = pedigree.select(person)?;
    output.verbose_ctx("report", &format!("Selected {} ({})", root.name, root.id));

    // The numbered walk requires acyclic ancestry to terminate.
    pedigree.check_ancestry(root)?;

    if output.is_json() {
        let mut walk = Ahnentafel::new(&pedigree, root);
        if let Some(cap) = generations {
            walk = walk.with_generation_cap(cap);
        }

        let entries = walk.collect::<Result<Vec<_>, _>>()?;
        let items: Vec<_> = entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "ahnen": entry.ahnen,
                    "generation": entry.generation(),
                    "id": entry.person.id,
                    "name": entry.person.name,
                    "birth": entry.person.birth.as_ref().map(|e| e.long()),
                    "death": entry.person.death.as_ref().map(|e| e.long()),
                })
            })
            .collect();
        output.data(&items);
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &pedigree, root, generations)?;
    }

    Ok(())
}
