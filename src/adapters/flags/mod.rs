//! Flag glyph lookup. Implements FlagLookup.
//!
//! A two-letter ISO 3166 code maps to a pair of Unicode regional indicator
//! symbols, which renderers show as the country's flag.

use crate::ports::FlagLookup;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Computes flags from regional indicator symbols. No table needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionalIndicatorFlags;

impl FlagLookup for RegionalIndicatorFlags {
    fn flag_for(&self, country_code: &str) -> Option<String> {
        let code = country_code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        code.chars()
            .map(|c| {
                let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
                char::from_u32(REGIONAL_INDICATOR_A + offset)
            })
            .collect()
    }
}
