//! Derived views for the recipe library.

use crate::model::recipe::{Recipe, RecipeCategory, RecipeFilter, RecipeSort};
use crate::query::{mean, percentage};

/// Returns the recipes passing every active filter criterion.
///
/// A recipe passes when its tag set intersects the selected tags (or no
/// tags are selected), it matches the favorites-only flag, and its name
/// contains the search text case-insensitively.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    let search = filter.search.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            filter.tags.is_empty() || recipe.tags.iter().any(|tag| filter.tags.contains(tag))
        })
        .filter(|recipe| !filter.favorites_only || recipe.favorite)
        .filter(|recipe| search.is_empty() || recipe.name.to_lowercase().contains(&search))
        .collect()
}

/// Stable sort by the selected key; ties break by id so repeated
/// computations on unchanged data agree.
pub fn sort_recipes<'a>(mut recipes: Vec<&'a Recipe>, sort: RecipeSort) -> Vec<&'a Recipe> {
    match sort {
        RecipeSort::NameAsc => recipes.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        }),
        RecipeSort::NewestFirst => recipes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        }),
        RecipeSort::MostCooked => recipes.sort_by(|a, b| {
            b.times_cooked
                .cmp(&a.times_cooked)
                .then_with(|| a.id.cmp(&b.id))
        }),
    }
    recipes
}

/// Per-category slice of the library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: RecipeCategory,
    pub count: usize,
    pub share: f64,
}

/// Aggregates over the whole library.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStats {
    pub total: usize,
    pub favorites: usize,
    pub favorite_share: f64,
    /// Mean over recipes that carry a cook time; recipes without one are
    /// excluded from the denominator, not coerced to zero.
    pub avg_cook_minutes: Option<f64>,
    /// Categories with at least one recipe, in display order.
    pub by_category: Vec<CategoryShare>,
}

pub fn recipe_stats(recipes: &[Recipe]) -> RecipeStats {
    let total = recipes.len();
    let favorites = recipes.iter().filter(|recipe| recipe.favorite).count();
    let avg_cook_minutes = mean(
        recipes
            .iter()
            .filter_map(|recipe| recipe.cook_minutes)
            .map(f64::from),
    );

    let by_category = RecipeCategory::ALL
        .iter()
        .filter_map(|&category| {
            let count = recipes
                .iter()
                .filter(|recipe| recipe.category == category)
                .count();
            (count > 0).then_some(CategoryShare {
                category,
                count,
                share: percentage(count, total),
            })
        })
        .collect();

    RecipeStats {
        total,
        favorites,
        favorite_share: percentage(favorites, total),
        avg_cook_minutes,
        by_category,
    }
}

/// Top-`n` recipes by usage count; ties break by earliest creation time,
/// then id.
pub fn most_cooked<'a>(recipes: &'a [Recipe], n: usize) -> Vec<&'a Recipe> {
    let mut ranked: Vec<&Recipe> = recipes.iter().collect();
    ranked.sort_by(|a, b| {
        b.times_cooked
            .cmp(&a.times_cooked)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.truncate(n);
    ranked
}
