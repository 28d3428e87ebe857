use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LadleError, Result};
use crate::model::{Field, FieldValue};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    id: u32,
    field: Field,
    value: FieldValue,
) -> Result<CmdResult> {
    let mut recipes = store.load_recipes()?;
    let recipe = recipes
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(LadleError::RecipeNotFound(id))?;

    recipe.set_field(field, value)?;
    let updated = recipe.clone();
    store.save_recipes(&recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {} for recipe '{}'",
        field, updated.name
    )));
    result.affected_recipes.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::new_recipe;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_only_the_named_field() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, new_recipe("Pasta")).unwrap();
        let before = store.load_recipes().unwrap()[0].clone();

        run(&mut store, 1, Field::Servings, FieldValue::Number(6)).unwrap();

        let after = store.load_recipes().unwrap()[0].clone();
        assert_eq!(after.servings, 6);
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.ingredients, before.ingredients);
        assert_eq!(after.date_added, before.date_added);
    }

    #[test]
    fn replaces_list_fields_wholesale() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, new_recipe("Pasta")).unwrap();

        let lines = vec!["flour".to_string(), "eggs".to_string()];
        run(
            &mut store,
            1,
            Field::Ingredients,
            FieldValue::Lines(lines.clone()),
        )
        .unwrap();

        assert_eq!(store.load_recipes().unwrap()[0].ingredients, lines);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            9,
            Field::Name,
            FieldValue::Text("x".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, LadleError::RecipeNotFound(9)));
    }

    #[test]
    fn shape_mismatch_leaves_the_record_unchanged() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, new_recipe("Pasta")).unwrap();
        let before = store.load_recipes().unwrap();

        let err = run(
            &mut store,
            1,
            Field::PrepTime,
            FieldValue::Text("soon".to_string()),
        )
        .unwrap_err();

        assert!(matches!(err, LadleError::ValueMismatch { .. }));
        assert_eq!(store.load_recipes().unwrap(), before);
    }
}
