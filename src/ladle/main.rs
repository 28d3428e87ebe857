use clap::{CommandFactory, Parser};
use colored::*;
use ladle::api::{CmdMessage, LadleApi, MessageLevel};
use ladle::error::{LadleError, Result};
use ladle::model::{Field, FieldValue, NewRecipe, Recipe, DATE_FORMAT};
use ladle::store::fs::FileStore;
use std::io::Write;

mod args;
use args::{Cli, Commands};

const DATA_FILE: &str = "recipes.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let store = FileStore::new(DATA_FILE);
    if let Some(warning) = store.parse_warning() {
        eprintln!("{}", warning.yellow());
    }
    let mut api = LadleApi::new(store);

    match cli.command {
        Some(Commands::Add {
            name,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            servings,
            tags,
        }) => {
            let result = api.add_recipe(NewRecipe {
                name,
                ingredients,
                instructions,
                prep_time,
                cook_time,
                servings,
                tags,
            })?;
            print_messages(&result.messages);
        }

        Some(Commands::List { compact }) => {
            let result = api.list_recipes()?;
            if result.listed_recipes.is_empty() {
                println!("No recipes found.");
            } else if compact {
                println!("\nRecipes:");
                for recipe in &result.listed_recipes {
                    println!("#{}: {}", recipe.id, recipe.name);
                }
            } else {
                for recipe in &result.listed_recipes {
                    print_recipe(recipe);
                }
            }
        }

        Some(Commands::View { id }) => {
            let result = api.view_recipe(id)?;
            for recipe in &result.listed_recipes {
                print_recipe(recipe);
            }
        }

        Some(Commands::Edit { id, field, value }) => {
            let field = Field::from(field);
            let value = coerce_value(field, value)?;
            let result = api.edit_recipe(id, field, value)?;
            print_messages(&result.messages);
        }

        Some(Commands::Delete { id }) => {
            if confirm(&format!(
                "Are you sure you want to delete recipe #{}? (y/n): ",
                id
            ))? {
                let result = api.delete_recipe(id)?;
                print_messages(&result.messages);
            }
        }

        Some(Commands::Search { query }) => {
            let result = api.search_recipes(&query)?;
            if result.listed_recipes.is_empty() {
                println!("No recipes found matching '{}'", query);
            } else {
                println!("Found {} matching recipes:", result.listed_recipes.len());
                for recipe in &result.listed_recipes {
                    print_recipe(recipe);
                }
            }
        }

        None => {
            Cli::command().print_help().map_err(LadleError::Io)?;
            println!();
        }
    }

    Ok(())
}

/// Shape the raw `--value` tokens per field: one joined string for the
/// name, the token list for list fields, the first token parsed as a
/// number for the numeric fields.
fn coerce_value(field: Field, tokens: Vec<String>) -> Result<FieldValue> {
    match field {
        Field::Name => Ok(FieldValue::Text(tokens.join(" "))),
        Field::Ingredients | Field::Instructions | Field::Tags => Ok(FieldValue::Lines(tokens)),
        Field::PrepTime | Field::CookTime | Field::Servings => {
            let raw = tokens.first().cloned().unwrap_or_default();
            raw.parse::<u32>()
                .map(FieldValue::Number)
                .map_err(|_| LadleError::InvalidNumber { field, value: raw })
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush().map_err(LadleError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(LadleError::Io)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

const RULE_WIDTH: usize = 50;

fn print_recipe(recipe: &Recipe) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{}", rule);
    println!(
        "{}",
        format!("Recipe #{}: {}", recipe.id, recipe.name).bold()
    );
    println!("{}", rule);

    println!("\nPrep Time: {} minutes", recipe.prep_time);
    println!("Cook Time: {} minutes", recipe.cook_time);
    println!("Servings: {}", recipe.servings);

    println!("\nIngredients:");
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        println!("  {}. {}", i + 1, ingredient);
    }

    println!("\nInstructions:");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, instruction);
    }

    if !recipe.tags.is_empty() {
        println!("\nTags: {}", recipe.tags.join(", "));
    }

    println!(
        "\nAdded on: {}",
        recipe.date_added.format(DATE_FORMAT).to_string().dimmed()
    );
    println!("{}\n", rule);
}
