pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(about = "Larder - Ingredient-aware recipe search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes by ingredient
    Search {
        /// Ingredients to search for
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Maximum results per page
        #[arg(short, long)]
        limit: Option<usize>,

        /// Results to skip
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Emit raw JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Suggest catalog ingredients for a partial name
    Suggest {
        /// Partial ingredient name (at least 2 characters)
        partial: String,
    },

    /// List the quickest recipes in the corpus
    Popular {
        /// Maximum number of recipes
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show corpus statistics
    Stats,
}
