use crate::corpus::models::{Ingredient, Recipe, ScoredRecipe, SearchQuery, SearchResult};
use crate::corpus::CorpusStore;
use crate::error::{Error, Result};
use crate::search::fuzzy::FuzzyMatcher;
use crate::search::normalizer::IngredientNormalizer;
use crate::search::scorer::RecipeScorer;
use tracing::debug;

/// Hard bound on the per-request page size.
pub const MAX_LIMIT: usize = 100;

/// Suggestion lookups need at least this many characters.
const MIN_SUGGESTION_LEN: usize = 2;
const SUGGESTION_LIMIT: usize = 10;

/// Orchestrates a search: validate, fetch the corpus, score, filter,
/// sort, paginate. Stateless apart from the store handle, so calls can
/// run fully in parallel.
#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    store: S,
    normalizer: IngredientNormalizer,
    matcher: FuzzyMatcher,
    scorer: RecipeScorer,
}

impl<S: CorpusStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            normalizer: IngredientNormalizer::default(),
            matcher: FuzzyMatcher::new(),
            scorer: RecipeScorer::default(),
        }
    }

    /// Search the corpus for recipes matching the query ingredients.
    ///
    /// An empty ingredient list (after trimming blanks) is a graceful
    /// no-op, not an error; an out-of-bounds `limit` is rejected before
    /// any corpus access. Store failures propagate unchanged.
    pub async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResult> {
        if query.limit < 1 || query.limit > MAX_LIMIT {
            return Err(Error::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let ingredients: Vec<String> = query
            .ingredients
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if ingredients.is_empty() {
            debug!("Search with no ingredients, returning empty result");
            return Ok(SearchResult::empty());
        }

        let recipes = self.store.get_all_recipes().await?;
        if recipes.is_empty() {
            return Ok(SearchResult::empty());
        }
        debug!(
            "Scoring {} recipes against {} search ingredients",
            recipes.len(),
            ingredients.len()
        );

        let mut scored: Vec<ScoredRecipe> = recipes
            .into_iter()
            .filter_map(|recipe| {
                let score = self.scorer.calculate_score(&recipe, &ingredients);
                (score > 0.0).then_some(ScoredRecipe {
                    recipe,
                    match_score: score,
                })
            })
            .collect();

        // Stable sort: ties keep corpus order, so pagination is
        // reproducible across calls.
        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        let total_count = scored.len();
        let page: Vec<ScoredRecipe> = scored
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect();
        let has_more = query.offset.saturating_add(query.limit) < total_count;

        Ok(SearchResult {
            recipes: page,
            total_count,
            has_more,
        })
    }

    /// Autocomplete over the ingredient catalog. Partials shorter than
    /// two characters return nothing.
    pub async fn get_ingredient_suggestions(&self, partial: &str) -> Result<Vec<Ingredient>> {
        let partial = partial.trim();
        if partial.chars().count() < MIN_SUGGESTION_LEN {
            return Ok(Vec::new());
        }

        let normalized = self.normalizer.normalize(partial);
        let catalog = self.store.get_all_ingredients().await?;
        let matches = self.matcher.find_matches(&normalized, &catalog);

        Ok(matches
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|m| m.ingredient)
            .collect())
    }

    /// Quickest recipes first: a static stand-in for popularity, with
    /// no usage-based signal behind it.
    pub async fn get_popular_recipes(&self, limit: usize) -> Result<Vec<Recipe>> {
        let mut recipes = self.store.get_all_recipes().await?;
        recipes.sort_by_key(|r| r.cooking_time_minutes);
        recipes.truncate(limit);
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::Difficulty;
    use crate::corpus::InMemoryCorpus;

    struct FailingStore;

    impl CorpusStore for FailingStore {
        async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
            Err(Error::Corpus("store offline".to_string()))
        }

        async fn get_all_ingredients(&self) -> Result<Vec<Ingredient>> {
            Err(Error::Corpus("store offline".to_string()))
        }
    }

    fn recipe(id: i64, title: &str, minutes: u32, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            image: None,
            cooking_time_minutes: minutes,
            difficulty: Difficulty::Medium,
            ingredients: ingredients.iter().map(|i| (*i).to_string()).collect(),
            instructions: vec!["Cook".to_string()],
        }
    }

    fn engine() -> SearchEngine<InMemoryCorpus> {
        let recipes = vec![
            recipe(1, "Tomato Soup", 25, &["tomatoes", "onion", "cream"]),
            recipe(2, "Garlic Bread", 10, &["bread", "garlic", "butter"]),
            recipe(3, "Beef Stew", 90, &["beef", "carrots", "potatoes"]),
        ];
        let catalog = vec![
            Ingredient {
                name: "tomato".to_string(),
                normalized_name: "tomato".to_string(),
                category: "vegetable".to_string(),
                variations: vec!["tomatoes".to_string()],
                synonyms: vec![],
            },
            Ingredient {
                name: "chicken breast".to_string(),
                normalized_name: "chicken breast".to_string(),
                category: "meat".to_string(),
                variations: vec![],
                synonyms: vec![],
            },
        ];
        SearchEngine::new(InMemoryCorpus::new(recipes, catalog).unwrap())
    }

    fn query(ingredients: &[&str], limit: usize, offset: usize) -> SearchQuery {
        SearchQuery {
            ingredients: ingredients.iter().map(|i| (*i).to_string()).collect(),
            limit,
            offset,
        }
    }

    #[tokio::test]
    async fn test_limit_bounds_rejected_before_fetch() {
        // The failing store is never reached when validation fails.
        let engine = SearchEngine::new(FailingStore);

        let result = engine.search_recipes(&query(&["tomato"], 0, 0)).await;
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = engine.search_recipes(&query(&["tomato"], 101, 0)).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_ingredients_is_a_no_op() {
        let result = engine()
            .search_recipes(&query(&["", "   "], 10, 0))
            .await
            .unwrap();
        assert!(result.recipes.is_empty());
        assert_eq!(result.total_count, 0);
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let engine = SearchEngine::new(FailingStore);
        let result = engine.search_recipes(&query(&["tomato"], 10, 0)).await;
        assert!(matches!(result, Err(Error::Corpus(_))));

        let result = engine.get_ingredient_suggestions("tomato").await;
        assert!(matches!(result, Err(Error::Corpus(_))));
    }

    #[tokio::test]
    async fn test_non_matching_recipes_excluded() {
        let result = engine()
            .search_recipes(&query(&["tomato"], 10, 0))
            .await
            .unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.recipes[0].recipe.title, "Tomato Soup");
        assert!(result.recipes[0].match_score > 0.0);
        assert!(result.recipes[0].match_score <= 1.0);
    }

    #[tokio::test]
    async fn test_pagination() {
        let engine = engine();
        // "garlic" and "carrots" together touch two recipes.
        let q = query(&["garlic", "carrots"], 1, 0);
        let first = engine.search_recipes(&q).await.unwrap();
        assert_eq!(first.total_count, 2);
        assert_eq!(first.recipes.len(), 1);
        assert!(first.has_more);

        let second = engine
            .search_recipes(&query(&["garlic", "carrots"], 1, 1))
            .await
            .unwrap();
        assert_eq!(second.recipes.len(), 1);
        assert!(!second.has_more);
        assert_ne!(first.recipes[0].recipe.id, second.recipes[0].recipe.id);

        let past_end = engine
            .search_recipes(&query(&["garlic", "carrots"], 10, 5))
            .await
            .unwrap();
        assert!(past_end.recipes.is_empty());
        assert_eq!(past_end.total_count, 2);
        assert!(!past_end.has_more);
    }

    #[tokio::test]
    async fn test_suggestions_length_floor() {
        let engine = engine();
        assert!(engine.get_ingredient_suggestions("c").await.unwrap().is_empty());
        assert!(engine.get_ingredient_suggestions(" ").await.unwrap().is_empty());

        let suggestions = engine.get_ingredient_suggestions("ch").await.unwrap();
        assert!(suggestions.len() <= 10);
        assert_eq!(suggestions[0].name, "chicken breast");
    }

    #[tokio::test]
    async fn test_popular_recipes_sorted_by_cooking_time() {
        let popular = engine().get_popular_recipes(2).await.unwrap();
        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].title, "Garlic Bread");
        assert_eq!(popular[1].title, "Tomato Soup");
    }
}
