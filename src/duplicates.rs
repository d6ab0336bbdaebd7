use crate::locator::{locate_functions, FunctionRecord};
use serde::Serialize;
use std::collections::HashMap;

/// A function name defined more than once in the same source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// The shared function name.
    pub name: String,
    /// Every definition with this name, top to bottom. Always two or more.
    pub occurrences: Vec<FunctionRecord>,
}

/// Groups `functions` by name and keeps the names seen at least twice.
///
/// Groups come back in the order their names first appeared, and each
/// group's occurrences keep the order of the input.
pub fn find_duplicates(functions: &[FunctionRecord]) -> Vec<DuplicateGroup> {
    // Name -> slot in `groups`, so iteration follows first-seen order.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for func in functions {
        match slots.get(func.name.as_str()) {
            Some(&slot) => groups[slot].occurrences.push(func.clone()),
            None => {
                slots.insert(func.name.as_str(), groups.len());
                groups.push(DuplicateGroup {
                    name: func.name.clone(),
                    occurrences: vec![func.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.occurrences.len() > 1);
    groups
}

/// Locates the functions in `source` and returns its duplicate groups.
pub fn check_source(source: &str) -> Vec<DuplicateGroup> {
    find_duplicates(&locate_functions(source))
}
