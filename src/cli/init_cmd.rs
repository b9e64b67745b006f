//! Starter tree scaffolding
//!
//! Writes a three-person sample family so `ahnen report I1` works right
//! after init. An existing tree file is left untouched.

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::Person;
use crate::storage::PersonStore;

/// Sample records, in the same one-object-per-line form users author.
const STARTER_TREE: &str = r#"
{"id":"I1","name":"John Smith","sex":"male","birth":{"date":"1880-05-12","place":"Boston, Massachusetts"},"death":{"date":"1932-01-03","place":"Boston, Massachusetts"},"father":"I2","mother":"I3"}
{"id":"I2","name":"William Smith","sex":"male","birth":{"date":"1851"}}
{"id":"I3","name":"Mary Jones","sex":"female","birth":{"date":"1855","place":"Cork, Ireland"}}
"#;

/// Creates `people.jsonl` in the given directory
pub fn run(output: &Output, dir: &Path) -> Result<()> {
    let tree_path = dir.join("people.jsonl");
    if tree_path.exists() {
        output.success(&format!(
            "Tree file already exists at {}",
            tree_path.display()
        ));
        return Ok(());
    }

    let persons: Vec<Person> = STARTER_TREE
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()
        .context("Failed to build starter records")?;

    let store = PersonStore::new(&tree_path);
    store.write_all(&persons)?;

    output.success(&format!("Created starter tree at {}", tree_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_records_parse_and_link_up() {
        let persons: Vec<Person> = STARTER_TREE
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        let tree = crate::domain::Pedigree::from_persons(persons).unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.validate().is_clean());

        let root = tree.select("I1").unwrap();
        assert!(tree.father_of(root).unwrap().is_some());
        assert!(tree.mother_of(root).unwrap().is_some());
    }
}
