use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick ingredients, cook, and let the chef judge", long_about = None)]
pub struct Cli {
    /// JSON file holding the running score (overrides CHEF_SCORE_FILE)
    #[arg(long, global = true)]
    pub score_file: Option<PathBuf>,

    /// Recipe catalog CSV to use instead of the built-in recipes (overrides CHEF_CATALOG_CSV)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Seed for the chef's random choices (overrides CHEF_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cook the given ingredients and add the points to the score
    Cook {
        /// Ingredients on the board, e.g. tomato basil "olive oil"
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every ingredient the catalog uses
    Ingredients,
    /// List the recipes in the catalog, or show one recipe by name
    Recipes {
        /// Recipe to look up (case-insensitive)
        name: Option<String>,
    },
    /// Show the current score
    Score,
    /// Reset the stored score to zero
    ResetScore,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
