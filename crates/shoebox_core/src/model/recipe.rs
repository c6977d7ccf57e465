//! Recipe library domain model.
//!
//! # Responsibility
//! - Define the recipe record and its filter/sort value object.
//!
//! # Invariants
//! - `id` is stable and never reused for another recipe.
//! - `cook_minutes` is optional; statistics must exclude missing values
//!   rather than coerce them to zero.

use crate::model::StoredRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Meal slot a recipe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl RecipeCategory {
    /// All categories in display order.
    pub const ALL: [RecipeCategory; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Dessert,
        Self::Snack,
    ];
}

/// Coarse difficulty rating entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One user-entered recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
    pub servings: u32,
    /// Total cook time; recipes without one are excluded from averages.
    pub cook_minutes: Option<u32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    /// Usage counter driving the "most cooked" sort and ranking.
    #[serde(default)]
    pub times_cooked: u32,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a recipe with a generated id and the current timestamp.
    pub fn new(
        name: impl Into<String>,
        category: RecipeCategory,
        difficulty: Difficulty,
        servings: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, category, difficulty, servings)
    }

    /// Creates a recipe with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        category: RecipeCategory,
        difficulty: Difficulty,
        servings: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            difficulty,
            servings,
            cook_minutes: None,
            notes: None,
            tags: Vec::new(),
            favorite: false,
            times_cooked: 0,
            created_at: Utc::now(),
        }
    }
}

impl StoredRecord for Recipe {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Sort key for the recipe list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSort {
    #[default]
    NameAsc,
    NewestFirst,
    MostCooked,
}

/// Filter/sort state for the recipe list, persisted in its own slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Selected tags; an empty selection passes every recipe.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub favorites_only: bool,
    /// Case-insensitive substring matched against the recipe name.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: RecipeSort,
}
