use anyhow::{anyhow, Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use chef_kitchen::catalog::{load_catalog_csv, Catalog};
use chef_kitchen::cli::{parse_args, Command};
use chef_kitchen::config::KitchenConfig;
use chef_kitchen::engine::RngDraws;
use chef_kitchen::render::{OutcomeReport, RecipeCard, RecipeList};
use chef_kitchen::score_store::ScoreFile;
use chef_kitchen::session::KitchenSession;
use chef_kitchen::telemetry::init_logging;

fn load_catalog(config: &KitchenConfig) -> Result<Catalog> {
    match &config.catalog_csv {
        Some(path) => load_catalog_csv(path)
            .with_context(|| format!("Failed to load recipe catalog from '{}'", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn draws(config: &KitchenConfig) -> RngDraws<StdRng> {
    match config.seed {
        Some(seed) => RngDraws::new(StdRng::seed_from_u64(seed)),
        None => RngDraws::new(StdRng::from_entropy()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    let config = KitchenConfig::from_env()?.with_overrides(cli.score_file, cli.catalog, cli.seed);
    init_logging(&config.log_level)?;

    let catalog = load_catalog(&config)?;
    let score_file = ScoreFile::new(&config.score_file);

    match cli.command {
        Command::Cook { ingredients, json } => {
            let initial_score = score_file
                .load()
                .await
                .with_context(|| format!("Failed to read score from '{}'", score_file.path().display()))?;

            let mut kitchen = KitchenSession::new(&catalog, initial_score, draws(&config));
            for ingredient in &ingredients {
                kitchen.add(ingredient);
            }
            let selection = kitchen.selection().to_vec();
            let total_score = kitchen.score();

            match kitchen.cook() {
                Some(outcome) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(outcome)?);
                    } else {
                        print!("{}", OutcomeReport::new(&selection, outcome));
                    }
                    score_file
                        .save(outcome.total_score)
                        .await
                        .with_context(|| format!("Failed to save score to '{}'", score_file.path().display()))?;
                }
                None => {
                    println!("Nothing on the board to cook. Score: {}", total_score);
                }
            }
        }
        Command::Ingredients => {
            for ingredient in catalog.pantry() {
                println!("{}", ingredient);
            }
        }
        Command::Recipes { name: None } => {
            print!("{}", RecipeList(&catalog));
        }
        Command::Recipes { name: Some(name) } => {
            let recipe = catalog
                .find(&name)
                .ok_or_else(|| anyhow!("No recipe named '{}' in the catalog", name))?;
            print!("{}", RecipeCard(recipe));
        }
        Command::Score => {
            let score = score_file.load().await?;
            println!("Score: {}", score);
        }
        Command::ResetScore => {
            score_file.save(0).await?;
            info!("score reset");
            println!("Score reset to 0.");
        }
    }

    Ok(())
}
