use serde::{Deserialize, Serialize};

/// Recipe difficulty. Kept as a closed enum so corpus documents with
/// anything outside the three levels are rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub cooking_time_minutes: u32,
    pub difficulty: Difficulty,
    /// Ingredient lines as authored (free text, not catalog keys).
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Catalog entry for a known ingredient. Immutable once loaded,
/// uniquely keyed by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub normalized_name: String,
    pub category: String,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// One search request. Constructed per call and discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub ingredients: Vec<String>,
    pub limit: usize,
    pub offset: usize,
}

/// A recipe annotated with its relevance score for one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_score: f64,
}

/// Result envelope for one search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub recipes: Vec<ScoredRecipe>,
    /// Count of all recipes with `match_score > 0`, before pagination.
    pub total_count: usize,
    pub has_more: bool,
}

impl SearchResult {
    /// The graceful no-op result: empty query or empty corpus.
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
            total_count: 0,
            has_more: false,
        }
    }
}

/// A fuzzy-match candidate from the ingredient catalog. Ephemeral,
/// produced per call and not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientMatch {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub match_score: f64,
}
