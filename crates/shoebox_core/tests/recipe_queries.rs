use chrono::{Duration, Utc};
use shoebox_core::query::recipes::{filter_recipes, most_cooked, recipe_stats, sort_recipes};
use shoebox_core::{Difficulty, Recipe, RecipeCategory, RecipeFilter, RecipeSort};
use std::collections::BTreeSet;
use uuid::Uuid;

fn recipe(n: u128, name: &str) -> Recipe {
    Recipe::with_id(
        Uuid::from_u128(n),
        name,
        RecipeCategory::Dinner,
        Difficulty::Easy,
        2,
    )
}

fn tagged(n: u128, name: &str, tags: &[&str]) -> Recipe {
    let mut r = recipe(n, name);
    r.tags = tags.iter().map(|t| t.to_string()).collect();
    r
}

#[test]
fn tag_filter_passes_any_intersection() {
    let recipes = vec![
        tagged(1, "first", &["a"]),
        tagged(2, "second", &["b"]),
        tagged(3, "third", &["a", "b"]),
    ];
    let filter = RecipeFilter {
        tags: BTreeSet::from(["a".to_string()]),
        ..RecipeFilter::default()
    };

    let hits = filter_recipes(&recipes, &filter);
    let ids: Vec<Uuid> = hits.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(3)]);
}

#[test]
fn empty_tag_selection_passes_everything() {
    let recipes = vec![tagged(1, "first", &["a"]), recipe(2, "untagged")];
    let hits = filter_recipes(&recipes, &RecipeFilter::default());
    assert_eq!(hits.len(), 2);
}

#[test]
fn search_matches_name_case_insensitively() {
    let recipes = vec![recipe(1, "Chicken Soup"), recipe(2, "Beef Stew")];
    let filter = RecipeFilter {
        search: "chickEN".to_string(),
        ..RecipeFilter::default()
    };

    let hits = filter_recipes(&recipes, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Chicken Soup");
}

#[test]
fn filtering_is_idempotent() {
    let recipes = vec![
        tagged(1, "first", &["a"]),
        tagged(2, "second", &["b"]),
        tagged(3, "third", &["a", "b"]),
    ];
    let filter = RecipeFilter {
        tags: BTreeSet::from(["a".to_string()]),
        ..RecipeFilter::default()
    };

    let once: Vec<Recipe> = filter_recipes(&recipes, &filter)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Recipe> = filter_recipes(&once, &filter)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
}

#[test]
fn sort_orders_are_stable_and_deterministic() {
    let mut newer = recipe(1, "banana bread");
    newer.created_at = Utc::now();
    newer.times_cooked = 3;
    let mut older = recipe(2, "apple pie");
    older.created_at = Utc::now() - Duration::days(2);
    older.times_cooked = 3;
    let recipes = vec![newer, older];

    let all: Vec<&Recipe> = recipes.iter().collect();
    let by_name = sort_recipes(all.clone(), RecipeSort::NameAsc);
    assert_eq!(by_name[0].name, "apple pie");

    let by_age = sort_recipes(all.clone(), RecipeSort::NewestFirst);
    assert_eq!(by_age[0].name, "banana bread");

    // Equal usage counts fall back to the id tie-break.
    let by_usage = sort_recipes(all, RecipeSort::MostCooked);
    assert_eq!(by_usage[0].id, Uuid::from_u128(1));
}

#[test]
fn stats_over_empty_library_are_sentinels() {
    let stats = recipe_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.favorite_share, 0.0);
    assert_eq!(stats.avg_cook_minutes, None);
    assert!(stats.by_category.is_empty());
}

#[test]
fn average_cook_time_ignores_recipes_without_one() {
    let mut quick = recipe(1, "toast");
    quick.cook_minutes = Some(10);
    let untimed = recipe(2, "salad");
    let mut slow = recipe(3, "roast");
    slow.cook_minutes = Some(20);

    let stats = recipe_stats(&[quick, untimed, slow]);
    assert_eq!(stats.avg_cook_minutes, Some(15.0));
}

#[test]
fn category_shares_cover_only_present_categories() {
    let mut breakfast = recipe(1, "pancakes");
    breakfast.category = RecipeCategory::Breakfast;
    let dinner_a = recipe(2, "soup");
    let mut dinner_b = recipe(3, "stew");
    dinner_b.favorite = true;

    let stats = recipe_stats(&[breakfast, dinner_a, dinner_b]);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.favorites, 1);
    assert_eq!(stats.by_category.len(), 2);
    let dinner = stats
        .by_category
        .iter()
        .find(|share| share.category == RecipeCategory::Dinner)
        .unwrap();
    assert_eq!(dinner.count, 2);
    assert!((dinner.share - 66.666).abs() < 0.01);
}

#[test]
fn most_cooked_breaks_ties_by_earliest_creation() {
    let mut early = recipe(1, "soup");
    early.created_at = Utc::now() - Duration::days(5);
    early.times_cooked = 4;
    let mut late = recipe(2, "stew");
    late.created_at = Utc::now();
    late.times_cooked = 4;
    let mut top = recipe(3, "curry");
    top.times_cooked = 9;

    let recipes = vec![late, top, early];
    let ranked = most_cooked(&recipes, 2);
    assert_eq!(ranked[0].name, "curry");
    assert_eq!(ranked[1].name, "soup");
}
