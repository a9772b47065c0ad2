use std::collections::HashSet;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use super::{Catalog, Difficulty, Recipe};
use crate::error::{KitchenError, Result};

// Expected column headers
const NAME_COL: &str = "name";
const DIFFICULTY_COL: &str = "difficulty";
const INGREDIENTS_COL: &str = "ingredients";
const TAGS_COL: &str = "tags";

/// Separator used inside the ingredients and tags cells.
const LIST_SEPARATOR: char = ';';

fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads a recipe catalog from a CSV file with a `name,difficulty,ingredients[,tags]`
/// header. List cells are `;`-separated. Rows with an empty name are skipped.
pub fn load_catalog_csv(csv_path: &Path) -> Result<Catalog> {
    if !csv_path.exists() {
        return Err(KitchenError::CatalogNotFound(csv_path.to_path_buf()));
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .map_err(|source| KitchenError::Csv { row: 0, source })?;

    let headers = rdr
        .headers()
        .map_err(|source| KitchenError::Csv { row: 0, source })?
        .clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or(KitchenError::MissingColumn(name))
    };
    let name_idx = column(NAME_COL)?;
    let difficulty_idx = column(DIFFICULTY_COL)?;
    let ingredients_idx = column(INGREDIENTS_COL)?;
    let tags_idx = column(TAGS_COL).ok();

    let mut recipes = Vec::new();
    let mut seen = HashSet::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| KitchenError::Csv { row: row_index, source })?;

        let name = record.get(name_idx).unwrap_or_default().to_string();
        if name.is_empty() {
            warn!(row = row_index, "skipping catalog row with empty recipe name");
            continue;
        }

        let difficulty_label = record.get(difficulty_idx).unwrap_or_default();
        let difficulty = Difficulty::from_label(difficulty_label).ok_or_else(|| {
            KitchenError::UnknownDifficulty {
                recipe: name.clone(),
                value: difficulty_label.to_string(),
            }
        })?;

        let ingredients = split_list(record.get(ingredients_idx).unwrap_or_default());
        if ingredients.is_empty() {
            return Err(KitchenError::EmptyRecipe(name));
        }

        if !seen.insert(name.to_lowercase()) {
            return Err(KitchenError::DuplicateRecipe(name));
        }

        let tags = tags_idx
            .and_then(|idx| record.get(idx))
            .map(split_list)
            .unwrap_or_default();

        recipes.push(Recipe::new(name, ingredients, difficulty).with_tags(tags));
    }

    if recipes.is_empty() {
        return Err(KitchenError::EmptyCatalog(csv_path.to_path_buf()));
    }

    info!(path = ?csv_path, recipes = recipes.len(), "loaded recipe catalog");
    Ok(Catalog::new(recipes))
}
