//! PostgreSQL-flavored SASLprep (RFC 4013) password normalization.
//!
//! PostgreSQL never rejects a password that fails SASLprep: wherever strict
//! SASLprep would error, the server silently falls back to the original byte
//! sequence, so that passwords set by non-conforming clients keep working.
//! The server-side reference is `pg_saslprep` in `src/common/saslprep.c`.
//! A verifier built from a differently-normalized password would never match
//! a future login attempt, so the fallback chain here must mirror the server
//! bit for bit.

use std::borrow::Cow;

use stringprep::tables;
use unicode_normalization::UnicodeNormalization;

/// Prohibited-character predicates applied to the normalized password.
///
/// Unassigned code points (table A.1) are part of the set because PostgreSQL
/// prohibits them, diverging from strict SASLprep which permits them in
/// queries. The rest is the RFC 4013 union of C.1.2 and C.2.1 through C.9.
const PROHIBITED: &[fn(char) -> bool] = &[
    tables::unassigned_code_point,
    tables::non_ascii_space_character,
    tables::ascii_control_character,
    tables::non_ascii_control_character,
    tables::private_use,
    tables::non_character_code_point,
    tables::surrogate_code,
    tables::inappropriate_for_plain_text,
    tables::inappropriate_for_canonical_representation,
    tables::change_display_properties_or_deprecated,
    tables::tagging_character,
];

/// Normalize a password with PostgreSQL's variant of SASLprep.
///
/// Returns the input unchanged when it is pure 7-bit ASCII, and falls back
/// to the original password whenever the mapped string turns out empty,
/// contains a prohibited code point, or violates the RFC 3454 bidi rules.
/// This function never fails.
pub fn normalize(password: &str) -> Cow<'_, str> {
    if password.is_ascii() {
        return Cow::Borrowed(password);
    }

    // Map step: drop "commonly mapped to nothing" (B.1), turn non-ASCII
    // spaces (C.1.2) into plain ' '.
    let mapped: String = password
        .chars()
        .filter(|&c| !tables::commonly_mapped_to_nothing(c))
        .map(|c| {
            if tables::non_ascii_space_character(c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    if mapped.is_empty() {
        return Cow::Borrowed(password);
    }

    let normalized: String = mapped.nfkc().collect();
    if normalized.is_empty() {
        return Cow::Borrowed(password);
    }

    if normalized
        .chars()
        .any(|c| PROHIBITED.iter().any(|in_table| in_table(c)))
    {
        return Cow::Borrowed(password);
    }

    // RFC 3454 section 6: a string containing any RandALCat character (D.1)
    // must both start and end with one, and may not contain any LCat
    // character (D.2).
    if normalized.chars().any(tables::bidi_r_or_al) {
        let first_and_last_rtl = normalized.chars().next().is_some_and(tables::bidi_r_or_al)
            && normalized
                .chars()
                .next_back()
                .is_some_and(tables::bidi_r_or_al);
        if !first_and_last_rtl || normalized.chars().any(tables::bidi_l) {
            return Cow::Borrowed(password);
        }
    }

    Cow::Owned(normalized)
}
