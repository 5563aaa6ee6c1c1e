use crate::config::Settings;
use crate::corpus::models::SearchQuery;
use crate::corpus::InMemoryCorpus;
use crate::search::SearchEngine;
use crate::Result;

/// Search the corpus and print matching recipes
pub async fn search(
    settings: &Settings,
    ingredients: Vec<String>,
    limit: Option<usize>,
    offset: usize,
    json: bool,
) -> Result<()> {
    let engine = load_engine(settings).await?;

    let query = SearchQuery {
        ingredients,
        limit: limit.unwrap_or(settings.pagination.default_limit),
        offset,
    };

    let result = engine.search_recipes(&query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.recipes.is_empty() {
        println!("No recipes found");
        return Ok(());
    }

    println!(
        "Found {} recipes (showing {}):\n",
        result.total_count,
        result.recipes.len()
    );
    for scored in &result.recipes {
        println!(
            "  [{:.2}] {} ({} min, {:?})",
            scored.match_score,
            scored.recipe.title,
            scored.recipe.cooking_time_minutes,
            scored.recipe.difficulty
        );
        println!("         {}", scored.recipe.ingredients.join(", "));
    }
    if result.has_more {
        println!(
            "\n...and {} more (use --offset {})",
            result.total_count - offset - result.recipes.len(),
            offset + result.recipes.len()
        );
    }

    Ok(())
}

/// Print ingredient suggestions for a partial name
pub async fn suggest(settings: &Settings, partial: &str) -> Result<()> {
    let engine = load_engine(settings).await?;
    let suggestions = engine.get_ingredient_suggestions(partial).await?;

    if suggestions.is_empty() {
        println!("No suggestions for '{partial}'");
        return Ok(());
    }

    for ingredient in suggestions {
        println!("  {} ({})", ingredient.name, ingredient.category);
    }

    Ok(())
}

/// Print the quickest recipes in the corpus
pub async fn popular(settings: &Settings, limit: Option<usize>) -> Result<()> {
    let engine = load_engine(settings).await?;
    let limit = limit.unwrap_or(settings.pagination.popular_limit);
    let recipes = engine.get_popular_recipes(limit).await?;

    if recipes.is_empty() {
        println!("Corpus is empty");
        return Ok(());
    }

    for recipe in recipes {
        println!("  {} - {} min", recipe.title, recipe.cooking_time_minutes);
    }

    Ok(())
}

/// Print corpus statistics
pub async fn stats(settings: &Settings) -> Result<()> {
    let corpus = InMemoryCorpus::from_file(&settings.corpus.path).await?;

    println!("Corpus: {}", settings.corpus.path.display());
    println!("  Recipes:     {}", corpus.recipe_count());
    println!("  Ingredients: {}", corpus.ingredient_count());

    Ok(())
}

async fn load_engine(settings: &Settings) -> Result<SearchEngine<InMemoryCorpus>> {
    let corpus = InMemoryCorpus::from_file(&settings.corpus.path).await?;
    Ok(SearchEngine::new(corpus))
}
