// License: MIT

use std::path::Path;

use crate::DexError;
use crate::loader;
use crate::value::Value;

mod relations;

pub use relations::{
    NameRef, attach_signature_moves, name_index, pad_species, resolve_relations, to_dex_number,
};

/// The three document sets the toolchain operates on: type records, move
/// records, and one record per creature.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub types: Vec<Value>,
    pub moves: Vec<Value>,
    pub species: Vec<Value>,
}

impl Catalog {
    /// Load every data document under `data_dir`.
    ///
    /// `types.yml` is required; `moves.yml` is optional and defaults to
    /// empty. Species records come from `species/*.yml`, sorted by id.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, DexError> {
        let data_dir = data_dir.as_ref();
        let types = load_list(&data_dir.join("types.yml"))?;

        let moves_file = data_dir.join("moves.yml");
        let moves = if moves_file.exists() {
            load_list(&moves_file)?
        } else {
            Vec::new()
        };

        let species = load_species(&data_dir.join("species"))?;
        Ok(Catalog { types, moves, species })
    }
}

/// Load a document that must be a sequence of records.
fn load_list(path: &Path) -> Result<Vec<Value>, DexError> {
    match loader::load_file(path)? {
        Value::List(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        _ => Err(DexError::FileError {
            message: "Expected a sequence document".into(),
            path: path.to_string_lossy().to_string(),
        }),
    }
}

fn load_species(dir: &Path) -> Result<Vec<Value>, DexError> {
    let mut records = Vec::new();
    for path in loader::list_data_files(dir)? {
        records.push(loader::load_file(&path)?);
    }
    records.sort_by_key(|record| record.get("id").and_then(to_dex_number).unwrap_or(0));
    Ok(records)
}

#[cfg(test)]
mod tests;
