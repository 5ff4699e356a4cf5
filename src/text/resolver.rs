//! Localized headline/details lookup
//!
//! Language tags are compared with exact string equality, so `en` and
//! `en-US` are different languages here.
// TODO: match on the primary subtag (`en-US` -> `en`) once hosts agree on tag format

use serde::Serialize;

use crate::models::LocalizedText;

/// Text chosen for the active locale
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedText<'a> {
    pub headline: &'a str,
    pub details: &'a str,
}

/// First variant whose language equals `language`, if any
pub fn find_variant<'a>(variants: &'a [LocalizedText], language: &str) -> Option<&'a LocalizedText> {
    variants.iter().find(|variant| variant.language == language)
}

/// Pick the variant for `language`, or the fallback pair when none matches
pub fn resolve_text<'a>(
    variants: &'a [LocalizedText],
    language: &str,
    fallback_headline: &'a str,
    fallback_details: &'a str,
) -> ResolvedText<'a> {
    match find_variant(variants, language) {
        Some(variant) => ResolvedText {
            headline: &variant.headline,
            details: &variant.details,
        },
        None => {
            log::debug!("No text variant for language '{}', using fallback", language);
            ResolvedText {
                headline: fallback_headline,
                details: fallback_details,
            }
        }
    }
}
