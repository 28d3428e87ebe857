//! Business logic for each command. Every module exposes a `run` function
//! that takes a [`DataStore`](crate::store::DataStore), operates on the
//! whole collection, and returns a [`CmdResult`]. No I/O assumptions: the
//! CLI layer decides how results and messages reach the terminal.
//!
//! Mutating commands are all-or-nothing: they either apply their change
//! and persist the full collection, or return an error with nothing
//! modified and nothing written.

use crate::model::Recipe;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Recipes a query command returns for rendering, in collection order.
    pub listed_recipes: Vec<Recipe>,
    /// Recipes a mutating command created, changed, or removed.
    pub affected_recipes: Vec<Recipe>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }
}
