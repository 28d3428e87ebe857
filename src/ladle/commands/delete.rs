use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LadleError, Result};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut recipes = store.load_recipes()?;
    let position = recipes
        .iter()
        .position(|r| r.id == id)
        .ok_or(LadleError::RecipeNotFound(id))?;

    // Remaining recipes keep their ids; nothing is renumbered.
    let removed = recipes.remove(position);
    store.save_recipes(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe '{}' deleted successfully!",
        removed.name
    )));
    result.affected_recipes.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::new_recipe;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_exactly_the_matching_recipe() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, new_recipe("Pasta")).unwrap();
        add::run(&mut store, new_recipe("Soup")).unwrap();
        add::run(&mut store, new_recipe("Salad")).unwrap();

        run(&mut store, 2).unwrap();

        let recipes = store.load_recipes().unwrap();
        let remaining: Vec<(u32, &str)> = recipes.iter().map(|r| (r.id, r.name.as_str())).collect();
        assert_eq!(remaining, vec![(1, "Pasta"), (3, "Salad")]);
    }

    #[test]
    fn unknown_id_is_not_found_and_nothing_changes() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, new_recipe("Pasta")).unwrap();

        let err = run(&mut store, 5).unwrap_err();
        assert!(matches!(err, LadleError::RecipeNotFound(5)));
        assert_eq!(store.load_recipes().unwrap().len(), 1);
    }
}
