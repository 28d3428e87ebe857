use super::DataStore;
use crate::error::Result;
use crate::model::Recipe;

/// In-memory store for tests. Same whole-collection contract as
/// [`super::fs::FileStore`], no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        self.recipes = recipes.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::NewRecipe;

    /// Minimal valid recipe fields for tests that only care about the name.
    pub fn new_recipe(name: &str) -> NewRecipe {
        NewRecipe {
            name: name.to_string(),
            ingredients: vec!["water".to_string()],
            instructions: vec!["combine".to_string()],
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            tags: Vec::new(),
        }
    }

    /// Recipe fields with explicit ingredients and tags, for search tests.
    pub fn new_recipe_with(name: &str, ingredients: &[&str], tags: &[&str]) -> NewRecipe {
        NewRecipe {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ..new_recipe(name)
        }
    }
}
