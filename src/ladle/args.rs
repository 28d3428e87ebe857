use clap::{Parser, Subcommand, ValueEnum};
use ladle::model::Field;

#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(about = "Manage your recipes from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    Add {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// List of ingredients
        #[arg(long, required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// List of instructions
        #[arg(long, required = true, num_args = 1..)]
        instructions: Vec<String>,

        /// Preparation time in minutes
        #[arg(long = "prep-time")]
        prep_time: u32,

        /// Cooking time in minutes
        #[arg(long = "cook-time")]
        cook_time: u32,

        /// Number of servings
        #[arg(long)]
        servings: u32,

        /// Tags for categorizing the recipe
        #[arg(long, num_args = 0..)]
        tags: Vec<String>,
    },

    /// List all recipes
    List {
        /// Show compact list (IDs and names only)
        #[arg(long)]
        compact: bool,
    },

    /// View a specific recipe
    View {
        /// Recipe ID to view
        id: u32,
    },

    /// Edit a recipe
    Edit {
        /// Recipe ID to edit
        id: u32,

        /// Field to edit
        #[arg(long, value_enum)]
        field: FieldArg,

        /// New value for the field
        #[arg(long, required = true, num_args = 1..)]
        value: Vec<String>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID to delete
        id: u32,
    },

    /// Search for recipes
    Search {
        /// Search query
        query: String,
    },
}

/// Editable field names as accepted on the command line. Kept separate
/// from [`Field`] so clap stays out of the library.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Name,
    Ingredients,
    Instructions,
    #[value(name = "prep_time")]
    PrepTime,
    #[value(name = "cook_time")]
    CookTime,
    Servings,
    Tags,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Field::Name,
            FieldArg::Ingredients => Field::Ingredients,
            FieldArg::Instructions => Field::Instructions,
            FieldArg::PrepTime => Field::PrepTime,
            FieldArg::CookTime => Field::CookTime,
            FieldArg::Servings => Field::Servings,
            FieldArg::Tags => Field::Tags,
        }
    }
}
