use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let query_lower = query.to_lowercase();
    let matches: Vec<_> = store
        .load_recipes()?
        .into_iter()
        .filter(|r| r.matches(&query_lower))
        .collect();
    Ok(CmdResult::default().with_listed_recipes(matches))
}
