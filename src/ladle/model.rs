use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LadleError, Result};

/// Timestamp format used on disk and in all rendered output.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored recipe. Field order matches the on-disk JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub tags: Vec<String>,
    #[serde(with = "date_added_format")]
    pub date_added: NaiveDateTime,
}

impl Recipe {
    /// Build a new recipe stamped with the current local time.
    /// The caller (the add command) is responsible for assigning a free id.
    pub fn new(id: u32, fields: NewRecipe) -> Self {
        // The document format has whole-second resolution; drop nanos so a
        // freshly created recipe round-trips through storage unchanged.
        let now = Local::now().naive_local();
        let date_added = now.with_nanosecond(0).unwrap_or(now);
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            prep_time: fields.prep_time,
            cook_time: fields.cook_time,
            servings: fields.servings,
            tags: fields.tags,
            date_added,
        }
    }

    /// Case-insensitive substring match against name, ingredients and tags.
    /// Instructions are deliberately not searched.
    pub fn matches(&self, query_lower: &str) -> bool {
        if self.name.to_lowercase().contains(query_lower) {
            return true;
        }
        if self
            .ingredients
            .iter()
            .any(|line| line.to_lowercase().contains(query_lower))
        {
            return true;
        }
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
    }

    /// Overwrite a single editable field. `id` and `date_added` are not
    /// reachable here: [`Field`] is an allow-list that excludes them.
    /// A value whose shape does not match the field is a typed error and
    /// leaves the recipe untouched.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::Name, FieldValue::Text(name)) => self.name = name,
            (Field::Ingredients, FieldValue::Lines(lines)) => self.ingredients = lines,
            (Field::Instructions, FieldValue::Lines(lines)) => self.instructions = lines,
            (Field::PrepTime, FieldValue::Number(n)) => self.prep_time = n,
            (Field::CookTime, FieldValue::Number(n)) => self.cook_time = n,
            (Field::Servings, FieldValue::Number(n)) => self.servings = n,
            (Field::Tags, FieldValue::Lines(lines)) => self.tags = lines,
            (field, _) => {
                return Err(LadleError::ValueMismatch {
                    field,
                    expected: field.expected_shape(),
                })
            }
        }
        Ok(())
    }
}

/// Caller-supplied fields for a recipe that does not exist yet.
/// Everything except `id` and `date_added`, which the store assigns.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub tags: Vec<String>,
}

/// The editable fields of a recipe.
///
/// This is an explicit allow-list: `id` and `date_added` have no variant,
/// so identity and the creation timestamp can never be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Ingredients,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    Tags,
}

impl Field {
    /// Canonical name, as used by the storage document and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Ingredients => "ingredients",
            Field::Instructions => "instructions",
            Field::PrepTime => "prep_time",
            Field::CookTime => "cook_time",
            Field::Servings => "servings",
            Field::Tags => "tags",
        }
    }

    /// Human description of the value shape this field accepts.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Ingredients | Field::Instructions | Field::Tags => "a list of lines",
            Field::PrepTime | Field::CookTime | Field::Servings => "a number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for one editable field, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Lines(Vec<String>),
}

/// Serde adapter for `date_added`: `YYYY-MM-DD HH:MM:SS`, no timezone.
mod date_added_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Recipe {
        Recipe {
            id: 1,
            name: "Omelette".to_string(),
            ingredients: vec!["eggs".to_string(), "butter".to_string()],
            instructions: vec!["whisk".to_string(), "cook".to_string()],
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            tags: vec!["breakfast".to_string()],
            date_added: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn date_added_serializes_in_document_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date_added"], "2024-03-01 18:30:00");
    }

    #[test]
    fn recipe_round_trips_through_json() {
        let recipe = sample();
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn matches_searches_name_ingredients_and_tags_only() {
        let mut recipe = sample();
        recipe.instructions = vec!["add eggnog".to_string()];
        recipe.ingredients = vec!["flour".to_string()];
        recipe.tags = vec![];

        // "omelette" hits the name, case-insensitively
        assert!(recipe.matches("omel"));
        // instructions are not searched
        assert!(!recipe.matches("eggnog"));
    }

    #[test]
    fn set_field_rejects_shape_mismatch() {
        let mut recipe = sample();
        let before = recipe.clone();

        let err = recipe
            .set_field(Field::Servings, FieldValue::Text("four".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            LadleError::ValueMismatch {
                field: Field::Servings,
                ..
            }
        ));
        assert_eq!(recipe, before);
    }

    #[test]
    fn set_field_updates_only_the_named_field() {
        let mut recipe = sample();
        let before = recipe.clone();

        recipe
            .set_field(Field::PrepTime, FieldValue::Number(15))
            .unwrap();

        assert_eq!(recipe.prep_time, 15);
        assert_eq!(recipe.id, before.id);
        assert_eq!(recipe.name, before.name);
        assert_eq!(recipe.cook_time, before.cook_time);
        assert_eq!(recipe.date_added, before.date_added);
    }
}
