use crate::corpus::models::{Ingredient, Recipe};
use crate::corpus::CorpusStore;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk corpus document: `{"recipes": [...], "ingredients": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

/// In-memory corpus store. Immutable after construction, so reads are
/// trivially consistent and searches can run fully in parallel.
#[derive(Debug, Clone)]
pub struct InMemoryCorpus {
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
}

impl InMemoryCorpus {
    pub fn new(recipes: Vec<Recipe>, ingredients: Vec<Ingredient>) -> Result<Self> {
        for recipe in &recipes {
            validate_recipe(recipe)?;
        }
        Ok(Self {
            recipes,
            ingredients,
        })
    }

    /// Load a corpus from a JSON document on disk.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let document: CorpusDocument = serde_json::from_str(&raw)?;

        let corpus = Self::new(document.recipes, document.ingredients)?;
        info!(
            "Loaded corpus from {:?}: {} recipes, {} ingredients",
            path,
            corpus.recipe_count(),
            corpus.ingredient_count()
        );

        Ok(corpus)
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

impl CorpusStore for InMemoryCorpus {
    async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    async fn get_all_ingredients(&self) -> Result<Vec<Ingredient>> {
        Ok(self.ingredients.clone())
    }
}

/// Enforce the Recipe invariants at load time rather than per search.
fn validate_recipe(recipe: &Recipe) -> Result<()> {
    if recipe.ingredients.is_empty() {
        return Err(Error::Validation(format!(
            "Recipe {} has no ingredients",
            recipe.id
        )));
    }
    if recipe.instructions.is_empty() {
        return Err(Error::Validation(format!(
            "Recipe {} has no instructions",
            recipe.id
        )));
    }
    if recipe.cooking_time_minutes == 0 {
        return Err(Error::Validation(format!(
            "Recipe {} has a non-positive cooking time",
            recipe.id
        )));
    }
    Ok(())
}
