//! Text rendering for tool responses
//!
//! Fixed templates over decoded [`Pokemon`] records. Stat lines follow
//! upstream record order.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::Pokemon;

/// Upper-case the first letter of every alphabetic run.
///
/// `"ditto"` becomes `"Ditto"`, `"mr-mime"` becomes `"Mr-Mime"`. A word
/// with no separators just gets its first letter capitalized. Applying
/// it twice yields the same string.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Render the information block for a single Pokemon.
pub fn pokemon_summary(pokemon: &Pokemon) -> String {
    let mut out = format!(
        "🔍 Pokemon Information for {}:\n\n\
         Height: {} decimeters\n\
         Weight: {} hectograms\n\
         Types: {}\n\n\
         Base Stats:\n",
        title_case(&pokemon.name),
        pokemon.height,
        pokemon.weight,
        pokemon.type_names().join(", "),
    );
    for entry in &pokemon.stats {
        let _ = writeln!(out, "{}: {}", entry.stat.name, entry.base_stat);
    }
    out
}

/// Render the stat comparison between two Pokemon.
///
/// Stats are paired positionally and the displayed stat names come from
/// the first Pokemon. Lists of unequal length are rejected rather than
/// truncated or overrun.
pub fn pokemon_comparison(a: &Pokemon, b: &Pokemon) -> Result<String> {
    if a.stats.len() != b.stats.len() {
        return Err(Error::StatCountMismatch {
            left: a.name.clone(),
            left_count: a.stats.len(),
            right: b.name.clone(),
            right_count: b.stats.len(),
        });
    }

    let mut out = format!(
        "⚔️ Pokemon Comparison: {} vs {}\n\nBase Stats Comparison:\n",
        title_case(&a.name),
        title_case(&b.name),
    );
    for (left, right) in a.stats.iter().zip(&b.stats) {
        let _ = writeln!(out, "{}: {} vs {}", left.stat.name, left.base_stat, right.base_stat);
    }
    Ok(out)
}
