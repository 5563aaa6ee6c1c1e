use crate::corpus::models::{Difficulty, Recipe};
use std::collections::{HashMap, HashSet};

const SCORE_EXACT: f64 = 1.0;
const SCORE_SUBSTRING: f64 = 0.9;
const SCORE_SUBSTRING_LOOSE: f64 = 0.8;
const SCORE_WORD_BOUNDARY: f64 = 0.7;
const SCORE_VEGETABLE_CLASS: f64 = 0.6;

/// Singular/plural counterparts recognized at the word-boundary tier.
const PLURAL_PAIRS: &[(&str, &str)] = &[
    ("tomato", "tomatoes"),
    ("onion", "onions"),
    ("pepper", "peppers"),
    ("carrot", "carrots"),
    ("potato", "potatoes"),
    ("vegetable", "vegetables"),
    ("celery", "celeries"),
    ("lettuce", "lettuces"),
];

/// Vocabulary backing the special-cased "vegetables" query.
const VEGETABLES: &[&str] = &[
    "tomato", "onion", "pepper", "carrot", "potato", "celery", "lettuce", "broccoli", "spinach",
    "cucumber", "zucchini", "cabbage", "cauliflower", "kale", "leek", "mushroom",
];

/// Computes a single relevance score in [0,1] for one recipe against a
/// set of search ingredients.
///
/// Self-contained on purpose: the scorer applies its own lightweight
/// canonicalization instead of calling the normalizer, and its plural
/// table and vegetable vocabulary are plain data injected at
/// construction.
#[derive(Debug, Clone)]
pub struct RecipeScorer {
    /// Maps each form of a known pair to its counterpart.
    plural_pairs: HashMap<String, String>,
    vegetables: HashSet<String>,
}

impl Default for RecipeScorer {
    fn default() -> Self {
        let mut plural_pairs = HashMap::new();
        for (singular, plural) in PLURAL_PAIRS {
            plural_pairs.insert((*singular).to_string(), (*plural).to_string());
            plural_pairs.insert((*plural).to_string(), (*singular).to_string());
        }
        Self {
            plural_pairs,
            vegetables: VEGETABLES.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

impl RecipeScorer {
    pub fn new(plural_pairs: HashMap<String, String>, vegetables: HashSet<String>) -> Self {
        Self {
            plural_pairs,
            vegetables,
        }
    }

    pub fn calculate_score(&self, recipe: &Recipe, search_ingredients: &[String]) -> f64 {
        if search_ingredients.is_empty() || recipe.ingredients.is_empty() {
            return 0.0;
        }

        let recipe_ingredients: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|i| canonicalize(i))
            .collect();

        let mut matched_count = 0usize;
        for search_ingredient in search_ingredients {
            let term = canonicalize(search_ingredient);
            if term.is_empty() {
                continue;
            }
            let best = recipe_ingredients
                .iter()
                .map(|ingredient| self.match_score(&term, ingredient))
                .fold(0.0_f64, f64::max);
            if best > 0.0 {
                matched_count += 1;
            }
        }

        if matched_count == 0 {
            return 0.0;
        }

        let base_score = matched_count as f64 / search_ingredients.len() as f64;
        let weighted = base_score
            * cooking_time_weight(recipe.cooking_time_minutes)
            * difficulty_weight(recipe.difficulty)
            * ingredient_count_weight(recipe.ingredients.len());

        weighted.min(1.0)
    }

    /// Best score for one search term against one recipe ingredient.
    /// The tiers have no fixed precedence; every check runs and the
    /// maximum wins.
    fn match_score(&self, term: &str, ingredient: &str) -> f64 {
        let mut score = 0.0_f64;

        if term == ingredient {
            score = score.max(SCORE_EXACT);
        }
        if ingredient.contains(term) || term.contains(ingredient) {
            score = score.max(SCORE_SUBSTRING);
        }

        // Looser containment: compare after collapsing known plural
        // forms, so "tomatoes" still lands inside "diced tomato".
        let term_singular = self.singularize_words(term);
        let ingredient_singular = self.singularize_words(ingredient);
        if ingredient_singular.contains(&term_singular)
            || term_singular.contains(&ingredient_singular)
        {
            score = score.max(SCORE_SUBSTRING_LOOSE);
        }

        if self.word_boundary_match(term, ingredient) {
            score = score.max(SCORE_WORD_BOUNDARY);
        }

        if (term == "vegetable" || term == "vegetables") && self.contains_vegetable(ingredient) {
            score = score.max(SCORE_VEGETABLE_CLASS);
        }

        score
    }

    /// Whole word, whole-word prefix, or known singular/plural
    /// counterpart of a word.
    fn word_boundary_match(&self, term: &str, ingredient: &str) -> bool {
        ingredient.split_whitespace().any(|word| {
            word == term
                || word.starts_with(term)
                || self.plural_pairs.get(term).is_some_and(|p| p == word)
        })
    }

    fn contains_vegetable(&self, ingredient: &str) -> bool {
        ingredient
            .split_whitespace()
            .any(|word| self.vegetables.contains(self.singular_form(word)))
    }

    fn singular_form<'a>(&'a self, word: &'a str) -> &'a str {
        match self.plural_pairs.get(word) {
            // The table maps both ways; only follow plural -> singular.
            Some(other) if other.len() < word.len() => other.as_str(),
            _ => word,
        }
    }

    fn singularize_words(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.singular_form(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Scorer-local canonicalization: lowercase, trim, whitespace collapse.
fn canonicalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn cooking_time_weight(minutes: u32) -> f64 {
    match minutes {
        0..=15 => 1.1,
        16..=30 => 1.0,
        31..=60 => 0.9,
        _ => 0.8,
    }
}

fn difficulty_weight(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 1.1,
        Difficulty::Medium => 1.0,
        Difficulty::Hard => 0.9,
    }
}

fn ingredient_count_weight(count: usize) -> f64 {
    match count {
        0..=5 => 1.05,
        6..=10 => 1.0,
        _ => 0.95,
    }
}
