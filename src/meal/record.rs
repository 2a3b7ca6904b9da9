// src/meal/record.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::{markup::split_breaks, sanitize::strip_allergy_codes};

/// One meal row. Only the fields we display are kept.
///
/// Text fields accept JSON strings only; `false`, `null`, numbers etc.
/// decode as absent, so a missing field can never be shown as "false".
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MealRecord {
    /// `쌀밥<br/>김치(9.13)<br/>...`
    #[serde(rename = "DDISH_NM", default, deserialize_with = "lenient_text")]
    pub dish_names: Option<String>,

    /// `650.2 Kcal`
    #[serde(rename = "CAL_INFO", default, deserialize_with = "lenient_text")]
    pub calories: Option<String>,

    /// `탄수화물(g) : 95.1<br/>단백질(g) : 30.2<br/>...`
    #[serde(rename = "NTR_INFO", default, deserialize_with = "lenient_text")]
    pub nutrition: Option<String>,
}

fn lenient_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// What the detail region shows for a published meal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MealDetails {
    pub menu: Vec<String>,
    pub calories: Option<String>,
    pub nutrition: Vec<String>,
}

impl MealRecord {
    /// `None` when there are no dish names to show.
    pub fn details(&self) -> Option<MealDetails> {
        let dishes = self.dish_names.as_deref().filter(|d| !d.is_empty())?;

        Some(MealDetails {
            menu: menu_items(dishes),
            calories: self.calories.clone().filter(|c| !c.is_empty()),
            nutrition: self.nutrition.as_deref().map(text_lines).unwrap_or_default(),
        })
    }
}

/// Dish list: split on line breaks, drop allergy codes, drop blanks.
pub fn menu_items(dishes: &str) -> Vec<String> {
    split_breaks(dishes)
        .into_iter()
        .map(strip_allergy_codes)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Multi-line text: split on line breaks, trim, drop blanks.
pub fn text_lines(text: &str) -> Vec<String> {
    split_breaks(text)
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
