//! Fuzzy spelling suggestions for closed vocabularies (OSM tag values)

use strsim::{jaro_winkler, normalized_levenshtein};

/// Characters splitting compound vocabulary entries like `motorway_link`
const SEPARATORS: &[char] = &['_', '-', '/'];

/// Minimum similarity for a candidate to be suggested at all.
/// "totally_invalid" must stay unmatched while "primay" still finds "primary".
const MIN_THRESHOLD: f64 = 0.65;

/// Find the best fuzzy match using hybrid semantic + character-based scoring
///
/// Character similarity is Jaro-Winkler 70% + Normalized Levenshtein 30%, with
/// semantic bonuses:
/// - Prefix matching: up to 20% for a strong prefix similarity (≥4 chars)
/// - Length similarity: up to 10% when both strings are long and of similar length
/// - Compound parts: up to 12% per part that closely matches the input
/// - Anti-bias penalty: -10% for short bare candidates against long input
pub fn find_best_fuzzy_match<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best_match = None;
    let mut best_score = 0.0f64;

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();

        let jw_score = jaro_winkler(&input_lower, &candidate_lower);
        let lev_score = normalized_levenshtein(&input_lower, &candidate_lower);
        let combined_score = (jw_score * 0.7) + (lev_score * 0.3);

        let mut semantic_bonus = 0.0;

        let prefix_len = input_lower.chars().count().min(7);
        if prefix_len >= 4 {
            let input_prefix = input_lower.chars().take(prefix_len).collect::<String>();
            let candidate_prefix = candidate_lower.chars().take(prefix_len).collect::<String>();

            let prefix_similarity = normalized_levenshtein(&input_prefix, &candidate_prefix);
            if prefix_similarity > 0.7 {
                semantic_bonus += 0.2 * prefix_similarity;
            }
        }

        if input_lower.len() >= 8 && candidate_lower.len() >= 8 {
            let length_ratio = 1.0
                - ((input_lower.len() as f64 - candidate_lower.len() as f64).abs()
                    / input_lower.len().max(candidate_lower.len()) as f64);
            if length_ratio > 0.7 {
                semantic_bonus += 0.1 * length_ratio;
            }
        }

        let is_compound = candidate_lower.contains(SEPARATORS);
        if is_compound {
            for part in candidate_lower.split(SEPARATORS) {
                if part.len() >= 4 {
                    let part_similarity = jaro_winkler(&input_lower, part);
                    if part_similarity > 0.85 {
                        semantic_bonus += 0.12 * part_similarity;
                    }
                }
            }
        }

        if input_lower.len() >= 8 && candidate_lower.len() <= 7 && !is_compound {
            semantic_bonus -= 0.1;
        }

        let final_score = combined_score + semantic_bonus;

        if final_score >= MIN_THRESHOLD && final_score > best_score {
            best_score = final_score;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Suggest a correction for a value that is not part of `vocabulary`
///
/// Returns `None` when the value is already an entry (case-sensitive, tag
/// values are case-sensitive) or when nothing is close enough. A value that
/// only differs in case gets the properly cased entry.
pub fn suggest_correction<'a, I>(value: &str, vocabulary: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let vocabulary = vocabulary.into_iter();
    if vocabulary.clone().any(|v| v == value) {
        return None;
    }

    find_best_fuzzy_match(value, vocabulary)
}
