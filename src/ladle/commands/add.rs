use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LadleError, Result};
use crate::model::{NewRecipe, Recipe};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, fields: NewRecipe) -> Result<CmdResult> {
    let mut recipes = store.load_recipes()?;

    if recipes
        .iter()
        .any(|r| r.name.to_lowercase() == fields.name.to_lowercase())
    {
        return Err(LadleError::DuplicateName(fields.name));
    }

    // IDs are never reused after deletion, so the next free id is one past
    // the highest ever assigned, not the collection length.
    let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let recipe = Recipe::new(id, fields);

    recipes.push(recipe.clone());
    store.save_recipes(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe '{}' added successfully!",
        recipe.name
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}
