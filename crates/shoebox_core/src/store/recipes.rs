//! Recipe library store.
//!
//! # Responsibility
//! - Own the recipe collection and its filter state.
//! - Notify subscribers after every mutation.

use crate::model::recipe::{Recipe, RecipeFilter};
use crate::store::collection::Collection;
use crate::store::subscribers::{Subscribers, SubscriptionId};
use crate::store::value::PersistedValue;
use crate::store::write_behind::WriteBehind;
use uuid::Uuid;

pub const RECIPES_SLOT: &str = "recipes/collection";
pub const RECIPE_FILTER_SLOT: &str = "recipes/filter";

pub struct RecipeStore {
    recipes: Collection<Recipe>,
    filter: PersistedValue<RecipeFilter>,
    subscribers: Subscribers,
}

impl RecipeStore {
    pub(crate) fn new(records: Vec<Recipe>, filter: RecipeFilter, writer: WriteBehind) -> Self {
        Self {
            recipes: Collection::new(RECIPES_SLOT, records, writer.clone()),
            filter: PersistedValue::new(RECIPE_FILTER_SLOT, filter, writer),
            subscribers: Subscribers::default(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.records()
    }

    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.add(recipe);
        self.subscribers.notify();
    }

    pub fn update_recipe(&mut self, recipe: Recipe) {
        if self.recipes.update(recipe) {
            self.subscribers.notify();
        }
    }

    pub fn remove_recipe(&mut self, id: Uuid) {
        if self.recipes.remove(id) {
            self.subscribers.notify();
        }
    }

    pub fn toggle_favorite(&mut self, id: Uuid) {
        if self.recipes.modify(id, |recipe| recipe.favorite = !recipe.favorite) {
            self.subscribers.notify();
        }
    }

    /// Bumps the usage counter behind the "most cooked" views.
    pub fn record_cooked(&mut self, id: Uuid) {
        if self
            .recipes
            .modify(id, |recipe| recipe.times_cooked += 1)
        {
            self.subscribers.notify();
        }
    }

    pub fn filter(&self) -> &RecipeFilter {
        self.filter.get()
    }

    pub fn set_filter(&mut self, filter: RecipeFilter) {
        self.filter.set(filter);
        self.subscribers.notify();
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
        self.subscribers.notify();
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
