pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod score_store;
pub mod session;
pub mod telemetry;

pub use catalog::{Catalog, Difficulty, Recipe};
pub use engine::{chef_feedback, recommend_recipes, score_delta, ChefFeedback, MatchRecord};
pub use error::KitchenError;
pub use session::{CookOutcome, KitchenSession};
