//! Groups flat (level, value) pairs into per-CPU id-paths.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::errors::{TopoError, TopoResult};
use crate::levels::LevelSchema;

/// One root-to-leaf sequence of `"level: value"` labels identifying a single
/// logical processor.
pub type IdPath = Vec<String>;

/// Group the flat pair sequence into records of one pair per level, reorder
/// each record ascending by level rank, and format the labels.
///
/// The source interleaves one full record's levels contiguously, so each
/// consecutive chunk of `schema.len()` pairs is one record. A pair count that
/// does not divide into whole records is rejected rather than truncated, as
/// is a record that names the same level twice.
#[instrument(level = "debug", skip(pairs, schema))]
pub fn id_paths(pairs: &[(String, i64)], schema: &LevelSchema) -> TopoResult<Vec<IdPath>> {
    if schema.is_empty() || pairs.len() % schema.len() != 0 {
        return Err(TopoError::MalformedInput {
            pairs: pairs.len(),
            levels: schema.len(),
        });
    }

    let mut paths = Vec::with_capacity(pairs.len() / schema.len());
    for (record, group) in pairs.chunks(schema.len()).enumerate() {
        let mut ranked = Vec::with_capacity(group.len());
        let mut seen = Vec::with_capacity(group.len());
        for (name, value) in group {
            let rank = schema
                .rank(name)
                .ok_or_else(|| TopoError::UnknownLevel {
                    level: name.clone(),
                })?;
            if seen.contains(&rank) {
                return Err(TopoError::DuplicateLevel {
                    level: name.clone(),
                    record,
                });
            }
            seen.push(rank);
            ranked.push((rank, format!("{name}: {value}")));
        }
        let path: IdPath = ranked
            .into_iter()
            .sorted_by_key(|&(rank, _)| rank)
            .map(|(_, label)| label)
            .collect();
        paths.push(path);
    }

    debug!("built {} id-paths", paths.len());
    Ok(paths)
}
