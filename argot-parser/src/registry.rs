//! The definition registry and its alias index.
//!
//! Each definition owns a single value cell shared by all of its aliases;
//! the index maps every alias to the definition's slot in the ordered
//! registry, so any alias resolves to the same state in O(1).

use std::collections::HashMap;

use log::debug;

use crate::parser::Error;

/// One declared argument or flag, with its runtime value cell.
#[derive(Debug)]
pub struct Definition {
    aliases: Vec<String>,
    description: String,
    default_text: String,
    is_flag: bool,
    cell: ValueCell,
}

/// Mutable per-definition state: the stored text and the required-tracking
/// tri-state (`None`: not required, `Some(false)`: pending, `Some(true)`:
/// satisfied).
#[derive(Debug)]
struct ValueCell {
    text: String,
    required_and_found: Option<bool>,
}

impl Definition {
    /// The aliases this definition answers to, in registration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The textual form of the default value.
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Whether this definition is a flag (no value token consumed).
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Whether this definition must be matched for a parse to succeed.
    pub fn is_required(&self) -> bool {
        self.cell.required_and_found.is_some()
    }

    /// The currently stored text.
    pub fn value_text(&self) -> &str {
        &self.cell.text
    }

    /// Whether this definition is required and still unmatched.
    pub fn is_pending(&self) -> bool {
        self.cell.required_and_found == Some(false)
    }

    /// The alias list joined by spaces, as rendered in errors and help.
    pub fn joined_aliases(&self) -> String {
        self.aliases.join(" ")
    }

    /// Overwrite the stored text and mark the definition satisfied if it is
    /// required.
    pub(crate) fn store(&mut self, text: String) {
        self.cell.text = text;
        if self.cell.required_and_found.is_some() {
            self.cell.required_and_found = Some(true);
        }
    }

    /// Return the cell to its default text and pending state.
    pub(crate) fn reset(&mut self) {
        self.cell.text = self.default_text.clone();
        if self.cell.required_and_found.is_some() {
            self.cell.required_and_found = Some(false);
        }
    }
}

/// Ordered definition storage plus the alias index used for token lookup.
#[derive(Debug, Default)]
pub struct Registry {
    defs: Vec<Definition>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Register one definition under all of its aliases.
    ///
    /// The whole alias set is checked before anything is inserted: if any
    /// alias is already indexed, or repeated within the set, the registry is
    /// left untouched and [`Error::DuplicateDefinition`] names the offender.
    pub fn register(
        &mut self,
        aliases: &[&str],
        description: &str,
        default_text: String,
        required: bool,
        is_flag: bool,
    ) -> Result<(), Error> {
        for (pos, alias) in aliases.iter().enumerate() {
            if self.index.contains_key(*alias) || aliases[..pos].contains(alias) {
                return Err(Error::DuplicateDefinition((*alias).to_string()));
            }
        }

        let slot = self.defs.len();

        for alias in aliases {
            self.index.insert((*alias).to_string(), slot);
        }

        debug!("registered definition {}", aliases.join(" "));

        self.defs.push(Definition {
            aliases: aliases.iter().map(|s| (*s).to_string()).collect(),
            description: description.to_string(),
            cell: ValueCell {
                text: default_text.clone(),
                required_and_found: required.then_some(false),
            },
            default_text,
            is_flag,
        });

        Ok(())
    }

    /// Resolve a token to its definition slot, if any alias matches.
    pub fn lookup(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// The definition at `slot`.
    pub fn def(&self, slot: usize) -> &Definition {
        &self.defs[slot]
    }

    pub(crate) fn def_mut(&mut self, slot: usize) -> &mut Definition {
        &mut self.defs[slot]
    }

    /// Iterate definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.defs.iter()
    }

    /// Return every cell to its default text and pending state.
    pub(crate) fn reset_cells(&mut self) {
        for def in &mut self.defs {
            def.reset();
        }
    }
}
