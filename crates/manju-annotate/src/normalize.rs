//! Character normalization ahead of matching.

/// Ordered substitution table applied by [`normalize_input`].
///
/// Möllendorff transliteration shorthand: `v`/`x` stand in for `ū`/`š` on
/// plain keyboards, `q` for `c`. Case-sensitive, applied in this order; the
/// substituted characters never themselves appear on the left-hand side, so
/// no rule can re-touch another rule's output.
const SUBSTITUTIONS: [(char, char); 6] = [
    ('v', 'ū'),
    ('x', 'š'),
    ('V', 'Ū'),
    ('X', 'Š'),
    ('q', 'c'),
    ('Q', 'C'),
];

/// Rewrite transliteration shorthand over an entire input.
///
/// Pure and total: every input maps to exactly one output. Applied to the
/// raw submission before line splitting so shorthand works anywhere,
/// including inside what will later be stripped as punctuation.
pub fn normalize_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push(*to),
            None => out.push(ch),
        }
    }
    out
}

/// Characters a cleaned token may contain.
///
/// A literal allow-list (the gloss alphabet plus hyphen and both apostrophe
/// forms), not a general punctuation filter: digits and every other symbol
/// are removed.
fn is_allowed(ch: char) -> bool {
    matches!(ch,
        'A'..='Z' | 'a'..='z' | 'Ž' | 'Ū' | 'ū' | 'Š' | 'š' | '-' | '\'' | '’')
}

/// Strip a token down to the allowed character set.
///
/// The empty string marks a token as unmatchable; the annotator carries it
/// through as a literal instead of querying the dictionary. Idempotent.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|ch| is_allowed(*ch)).collect()
}
