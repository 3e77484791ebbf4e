//! String-similarity helpers used by [`super::calculate_symbol_match_score`]'s
//! additive fallback (SPEC_FULL §4.5), backed by the `strsim` crate.

use strsim::jaro_winkler;

/// Dice's coefficient over bigrams, `[0.0, 1.0]`. Returns `0.0` for strings
/// shorter than two characters, matching `strsim`'s own edge-case convention
/// for bigram-based metrics.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let bigrams_a = bigrams(a);
    let bigrams_b = bigrams(b);

    if bigrams_a.is_empty() || bigrams_b.is_empty() {
        return 0.0;
    }

    let mut b_remaining = bigrams_b.clone();
    let mut matches = 0usize;
    for bg in &bigrams_a {
        if let Some(pos) = b_remaining.iter().position(|x| x == bg) {
            b_remaining.remove(pos);
            matches += 1;
        }
    }

    (2.0 * matches as f64) / (bigrams_a.len() + bigrams_b.len()) as f64
}

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Jaro-Winkler similarity, `[0.0, 1.0]`. Thin re-export so callers only need
/// this module for both metrics.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b)
}

/// `basename(path)`: the final path component after normalizing separators.
pub fn basename(path: &str) -> &str {
    let last_slash = path.rfind(['/', '\\']);
    match last_slash {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
