//! Record inspection commands (show, list)

use anyhow::Result;

use super::output::Output;
use crate::domain::{PedigreeError, Person, PersonId};
use crate::storage::PersonStore;

/// Shows one person's record
pub fn show(output: &Output, store: &PersonStore, person: &str) -> Result<()> {
    let pedigree = store.read_pedigree()?;
    let person = pedigree.select(person)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": person.id,
            "name": person.name,
            "sex": person.sex.map(|s| s.label()),
            "birth": person.birth.as_ref().map(|e| e.long()),
            "death": person.death.as_ref().map(|e| e.long()),
            "father": person.father,
            "mother": person.mother,
        }));
    } else {
        println!("{} ({})", person.name, person.id);
        if let Some(sex) = person.sex {
            println!("  sex:    {}", sex.label());
        }
        if let Some(birth) = &person.birth {
            println!("  born:   {}", birth.long());
        }
        if let Some(death) = &person.death {
            println!("  died:   {}", death.long());
        }
        print_parent("father", person.father.as_ref(), pedigree.father_of(person));
        print_parent("mother", person.mother.as_ref(), pedigree.mother_of(person));
    }

    Ok(())
}

fn print_parent(
    label: &str,
    link: Option<&PersonId>,
    resolved: Result<Option<&Person>, PedigreeError>,
) {
    match resolved {
        Ok(Some(parent)) => println!("  {}: {} ({})", label, parent.name, parent.id),
        Ok(None) => {}
        // A dangling link still names a key; show it with a marker.
        Err(_) => {
            if let Some(id) = link {
                println!("  {}: {} (missing record)", label, id);
            }
        }
    }
}

/// Lists all records, sorted by key
pub fn list(output: &Output, store: &PersonStore) -> Result<()> {
    let pedigree = store.read_pedigree()?;
    let persons = pedigree.sorted_persons();
    output.verbose_ctx("list", &format!("Loaded {} records", persons.len()));

    if output.is_json() {
        let items: Vec<_> = persons
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "lifespan": p.lifespan(),
                })
            })
            .collect();
        output.data(&items);
    } else if persons.is_empty() {
        println!("No records in {}.", store.path().display());
    } else {
        println!("{:<16} {:<32} LIFESPAN", "KEY", "NAME");
        println!("{}", "-".repeat(60));
        for person in persons {
            println!(
                "{:<16} {:<32} {}",
                person.id.to_string(),
                person.name,
                person.lifespan()
            );
        }
    }

    Ok(())
}
