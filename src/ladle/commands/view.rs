use crate::commands::CmdResult;
use crate::error::{LadleError, Result};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u32) -> Result<CmdResult> {
    let recipes = store.load_recipes()?;
    let recipe = recipes
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(LadleError::RecipeNotFound(id))?;
    Ok(CmdResult::default().with_listed_recipes(vec![recipe]))
}
