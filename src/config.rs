//! # Bounds Configuration
//!
//! Reads per-gene bounds from plain text: whitespace separated reals, taken two at a
//! time as `lower upper` pairs, one pair per gene.
//!
//! ```text
//! 0.0   10.0
//! -5.0  5.0
//! 1.0   3.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use simplega::config::parse_bounds;
//!
//! let bounds = parse_bounds("0 10\n-5 5\n").unwrap();
//! assert_eq!(bounds.len(), 2);
//! assert_eq!(bounds[1].lower(), -5.0);
//! ```

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    genotype::GeneBounds,
};

/// Parses `lower upper` pairs from `text`.
///
/// # Errors
///
/// Returns a `Configuration` error for an unparsable token, an odd number of values,
/// or an invalid pair.
pub fn parse_bounds(text: &str) -> Result<Vec<GeneBounds>> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|e| {
                GeneticError::Configuration(format!("Invalid bound value `{}`: {}", token, e))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() % 2 != 0 {
        return Err(GeneticError::Configuration(format!(
            "Bounds come in lower/upper pairs, got {} values",
            values.len()
        )));
    }

    values
        .chunks_exact(2)
        .enumerate()
        .map(|(gene, pair)| {
            GeneBounds::new(pair[0], pair[1]).map_err(|e| {
                GeneticError::Configuration(format!("Gene {}: {}", gene, e))
            })
        })
        .collect()
}

/// Reads and parses a bounds file.
///
/// # Errors
///
/// I/O failures surface as `Io`; malformed content as in [`parse_bounds`].
pub fn load_bounds<P: AsRef<Path>>(path: P) -> Result<Vec<GeneBounds>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let bounds = parse_bounds(&text)?;
    debug!(path = %path.display(), genes = bounds.len(), "Loaded gene bounds");
    Ok(bounds)
}
