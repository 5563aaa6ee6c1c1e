pub mod memory;
pub mod models;

use crate::error::Result;
use models::{Ingredient, Recipe};

pub use memory::InMemoryCorpus;

/// Read interface over the recipe corpus and the ingredient catalog.
///
/// The search engine only ever reads through this trait; storage
/// mechanics (and snapshot consistency under concurrent mutation) are
/// the implementation's problem. The fetch is the single suspension
/// point per search call.
pub trait CorpusStore {
    fn get_all_recipes(&self) -> impl std::future::Future<Output = Result<Vec<Recipe>>> + Send;
    fn get_all_ingredients(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Ingredient>>> + Send;
}
