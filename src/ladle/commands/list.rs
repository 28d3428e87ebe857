use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let recipes = store.load_recipes()?;
    Ok(CmdResult::default().with_listed_recipes(recipes))
}
