//! Special-case catalog
//!
//! Hand-authored payment plans for the driver/buyer ratios the community has
//! standardized. Each entry is an exact recipe, not a formula: the recipes
//! encode deliberately different choices (full-price assignment, percentage
//! tables, equal shares, whole-party grouping) and are independent of each
//! other. The catalog always wins over the generic allocator for a ratio it
//! covers.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::{
    gold::Gold,
    payments::{Distribution, PaymentRecord},
    run::RunSize,
};

mod eight_man;
mod four_man;
mod sixteen_man;

/// Composite key for one catalog entry.
type RecipeKey = (RunSize, usize, usize);

/// A recipe turns a per-buyer price into the entry's exact payment list.
type Recipe = fn(Gold) -> Vec<PaymentRecord>;

static RECIPES: LazyLock<FxHashMap<RecipeKey, Recipe>> = LazyLock::new(|| {
    let mut recipes = FxHashMap::default();

    four_man::register(&mut recipes);
    eight_man::register(&mut recipes);
    sixteen_man::register(&mut recipes);

    recipes
});

/// Look up the hand-authored payment plan for a ratio, if one exists.
///
/// Returns `None` when the ratio has no standardized recipe and the caller
/// should fall back to the generic allocator.
pub fn lookup(
    run_size: RunSize,
    driver_count: usize,
    buyer_count: usize,
    price: Gold,
) -> Option<Distribution> {
    RECIPES
        .get(&(run_size, driver_count, buyer_count))
        .map(|recipe| Distribution::new(recipe(price)))
}

/// Whether a ratio has a catalog entry.
pub fn contains(run_size: RunSize, driver_count: usize, buyer_count: usize) -> bool {
    RECIPES.contains_key(&(run_size, driver_count, buyer_count))
}
