pub mod engine;
pub mod fuzzy;
pub mod normalizer;
pub mod scorer;

pub use engine::SearchEngine;
pub use fuzzy::FuzzyMatcher;
pub use normalizer::IngredientNormalizer;
pub use scorer::RecipeScorer;
