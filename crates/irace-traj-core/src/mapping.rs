//! Parameter name mapping
//!
//! irace works with its own short parameter identifiers. The parameter-space
//! file (`paramfile.irace`) pairs each identifier with the switch the target
//! algorithm understands:
//!
//! ```text
//! # name        switch                 type  values
//! p0            "-NEH.Priority "       c     (ra_c1, sum_pij)
//! p1            "-NEH.Insertion "      c     (first_best, last_best)
//! ```

use crate::error::{TrajError, TrajResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Lookup table from irace identifiers to original parameter names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMapping {
    names: BTreeMap<String, String>,
}

impl NameMapping {
    /// Build the mapping from a parameter-space file on disk
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> TrajResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TrajError::io_with_path(
                format!("Failed to open parameter file {:?}: {}", path, e),
                path.display().to_string(),
            )
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build the mapping from any line-oriented reader
    ///
    /// The first line is a header and is skipped without inspection. Blank
    /// lines and `#` comments are ignored; any other line must carry at least
    /// an identifier and a name.
    pub fn from_reader<R: BufRead>(reader: R) -> TrajResult<Self> {
        let mut names = BTreeMap::new();

        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let line_number = index + 1;
            let mut tokens = line.split_whitespace();

            let Some(identifier) = tokens.next() else {
                continue;
            };
            if identifier.starts_with('#') {
                continue;
            }
            let Some(raw_name) = tokens.next() else {
                return Err(TrajError::malformed_parameter_file(line_number, line));
            };

            let original = raw_name.trim_matches('"').trim().to_string();
            if let Some(previous) = names.insert(identifier.to_string(), original) {
                debug!(
                    identifier,
                    previous = %previous,
                    line = line_number,
                    "duplicate parameter identifier, keeping the later name"
                );
            }
        }

        debug!(count = names.len(), "parameter name mapping built");
        Ok(Self { names })
    }

    /// Original name for an irace identifier
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.names.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(identifier, original_name)` pairs, ordered by identifier
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Column name used in rendered configurations: the original name without hyphens
pub fn column_name(original: &str) -> String {
    original.replace('-', "")
}

impl FromIterator<(String, String)> for NameMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
