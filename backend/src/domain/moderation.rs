//! Content moderation for chirp bodies.
//!
//! Censorship is an exact-token replacement: the body is split on single
//! spaces, each token is compared case-insensitively against a fixed
//! denylist, and matching tokens are replaced wholesale. Punctuation stuck
//! to a word defeats the match ("kerfuffle." survives). Splitting and
//! rejoining are both single-space delimited, so runs of spaces produce
//! empty tokens that pass through and the original spacing survives the
//! round trip. This is intentional fixed-delimiter behaviour, not
//! whitespace tokenisation.

/// Words replaced when they appear as standalone tokens.
const CENSORED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Literal substituted for a censored token.
const REPLACEMENT: &str = "****";

/// Return `body` with denylisted tokens replaced by [`REPLACEMENT`].
///
/// Pure and deterministic; the original casing of unmatched tokens is
/// preserved verbatim.
///
/// # Examples
/// ```
/// use backend::domain::moderation::censor;
///
/// assert_eq!(censor("I had a kerfuffle"), "I had a ****");
/// assert_eq!(censor("Kerfuffle!"), "Kerfuffle!");
/// ```
pub fn censor(body: &str) -> String {
    body.split(' ')
        .map(|token| {
            if is_censored(token) {
                REPLACEMENT
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_censored(token: &str) -> bool {
    CENSORED_WORDS
        .iter()
        .any(|word| token.eq_ignore_ascii_case(word))
}
