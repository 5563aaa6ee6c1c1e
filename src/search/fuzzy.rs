use crate::corpus::models::{Ingredient, IngredientMatch};

const SCORE_EXACT_NORMALIZED: f64 = 1.0;
const SCORE_EXACT_NAME: f64 = 0.95;
const SCORE_VARIATION: f64 = 0.8;
const SCORE_SYNONYM: f64 = 0.7;
const SCORE_SUBSTRING: f64 = 0.5;
const SCORE_EDIT_DISTANCE: f64 = 0.3;
const SCORE_EDIT_DISTANCE_VARIATION: f64 = 0.2;
const MAX_EDIT_DISTANCE: usize = 2;

/// Scores a query term against the ingredient catalog.
///
/// Each catalog entry gets the best score across the match tiers, and
/// only entries scoring above zero are returned, best first. Ties keep
/// catalog order.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn find_matches(&self, query: &str, catalog: &[Ingredient]) -> Vec<IngredientMatch> {
        let query = canonicalize(query);
        if query.is_empty() || catalog.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<IngredientMatch> = catalog
            .iter()
            .filter_map(|ingredient| {
                let score = self.score_ingredient(&query, ingredient);
                (score > 0.0).then(|| IngredientMatch {
                    ingredient: ingredient.clone(),
                    match_score: score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches
    }

    fn score_ingredient(&self, query: &str, ingredient: &Ingredient) -> f64 {
        let normalized = canonicalize(&ingredient.normalized_name);

        if query == normalized {
            return SCORE_EXACT_NORMALIZED;
        }
        if query == canonicalize(&ingredient.name) {
            return SCORE_EXACT_NAME;
        }
        if ingredient
            .variations
            .iter()
            .any(|v| canonicalize(v) == *query)
        {
            return SCORE_VARIATION;
        }
        if ingredient.synonyms.iter().any(|s| canonicalize(s) == *query) {
            return SCORE_SYNONYM;
        }
        if !normalized.is_empty()
            && (normalized.contains(query) || query.contains(&normalized))
        {
            return SCORE_SUBSTRING;
        }

        // Edit-distance fallback against the normalized name, plus a
        // weaker probe of every declared variation.
        let mut best = edit_distance_score(query, &normalized, SCORE_EDIT_DISTANCE);
        for variation in &ingredient.variations {
            let score =
                edit_distance_score(query, &canonicalize(variation), SCORE_EDIT_DISTANCE_VARIATION);
            best = best.max(score);
        }
        best
    }
}

/// Light text canonicalization local to the matcher: lowercase, trim,
/// comma/ampersand to space, whitespace collapse. Deliberately not the
/// full normalizer pipeline.
fn canonicalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace([',', '&'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn edit_distance_score(query: &str, candidate: &str, weight: f64) -> f64 {
    let max_len = query.chars().count().max(candidate.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    let distance = levenshtein(query, candidate);
    if distance > MAX_EDIT_DISTANCE {
        return 0.0;
    }
    weight * (1.0 - distance as f64 / max_len as f64)
}

/// Levenshtein distance with unit insert/delete/substitute costs,
/// two-row dynamic programming over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
