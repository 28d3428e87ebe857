//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! ladle operations. It dispatches to the right command function and
//! returns structured `Result<CmdResult>` values; it holds no business
//! logic and does no I/O or formatting of its own.
//!
//! `LadleApi<S: DataStore>` is generic over the storage backend:
//! production uses `LadleApi<FileStore>`, tests use
//! `LadleApi<InMemoryStore>` without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Field, FieldValue, NewRecipe};
use crate::store::DataStore;

pub struct LadleApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> LadleApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_recipe(&mut self, fields: NewRecipe) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_recipe(&self, id: u32) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn edit_recipe(
        &mut self,
        id: u32,
        field: Field,
        value: FieldValue,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, field, value)
    }

    pub fn delete_recipe(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_recipes(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
