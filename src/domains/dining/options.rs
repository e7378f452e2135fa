//! Dining locations, dates and meal types offered by the menu page.

use schemars::JsonSchema;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::client::DiningClient;
use super::error::DiningResult;
use super::selector::StaticSelector;

static LOCATION_OPTIONS: StaticSelector = StaticSelector::new("#MainContent_lstLocations option");
static DATE_OPTIONS: StaticSelector = StaticSelector::new("#MainContent_lstDay option");

/// Meal periods accepted by the menu form.
///
/// The upstream meal-type control is static, so this set is not scraped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Brunch,
}

impl MealType {
    /// Every meal type, in the order the form lists them.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Brunch,
    ];

    /// The form value for this meal type.
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Brunch => "Brunch",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<option>` of a `<select>` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value submitted with the form.
    pub value: String,
    /// Human-readable text.
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Choices currently offered by the menu page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiningOptions {
    pub locations: Vec<SelectOption>,
    pub dates: Vec<SelectOption>,
    pub meal_types: Vec<MealType>,
}

impl DiningOptions {
    /// Parse the location and date lists out of a menu page.
    pub fn from_page(html: &str) -> Self {
        let document = Html::parse_document(html);

        Self {
            locations: select_options(&document, &LOCATION_OPTIONS),
            dates: select_options(&document, &DATE_OPTIONS),
            meal_types: MealType::ALL.to_vec(),
        }
    }
}

fn select_options(document: &Html, selector: &Selector) -> Vec<SelectOption> {
    document
        .select(selector)
        .filter_map(|option| {
            let value = option.value().attr("value").filter(|v| !v.is_empty())?;
            let label = option.text().collect::<String>();
            Some(SelectOption::new(value, label.trim()))
        })
        .collect()
}

impl DiningClient {
    /// List the locations and dates the site currently offers.
    ///
    /// Acquires a session first and reads the options from a second page
    /// load made with that session's cookie.
    #[instrument(skip(self))]
    pub async fn fetch_options(&self) -> DiningResult<DiningOptions> {
        let session = self.acquire_session().await?;
        let response = self.get_page(Some(&session.cookie)).await?;
        let html = response.text().await?;

        let options = DiningOptions::from_page(&html);
        debug!(
            locations = options.locations.len(),
            dates = options.dates.len(),
            "Parsed dining options"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <select name="ctl00$MainContent$lstLocations" id="MainContent_lstLocations">
          <option value="">-- Select a location --</option>
          <option selected="selected" value="Arrillaga">
              Arrillaga
          </option>
          <option value="FlorenceMoore">Florence Moore</option>
        </select>
        <select name="ctl00$MainContent$lstDay" id="MainContent_lstDay">
          <option value="2/26/2026">Thursday, February 26</option>
          <option>No value</option>
          <option value="2/27/2026">Friday, February 27</option>
        </select>
        <select name="ctl00$MainContent$lstMealType" id="MainContent_lstMealType">
          <option value="Lunch">Lunch</option>
        </select>
    "#;

    #[test]
    fn test_from_page_reads_locations() {
        let options = DiningOptions::from_page(PAGE);
        assert_eq!(
            options.locations,
            vec![
                SelectOption::new("Arrillaga", "Arrillaga"),
                SelectOption::new("FlorenceMoore", "Florence Moore"),
            ]
        );
    }

    #[test]
    fn test_from_page_skips_options_without_value() {
        let options = DiningOptions::from_page(PAGE);
        let values: Vec<_> = options.dates.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["2/26/2026", "2/27/2026"]);
        assert_eq!(options.dates[0].label, "Thursday, February 26");
    }

    #[test]
    fn test_meal_types_are_fixed() {
        let options = DiningOptions::from_page("<html></html>");
        assert!(options.locations.is_empty());
        assert!(options.dates.is_empty());
        assert_eq!(options.meal_types, MealType::ALL.to_vec());
    }

    #[test]
    fn test_meal_type_deserialize() {
        let meal: MealType = serde_json::from_str(r#""Brunch""#).unwrap();
        assert_eq!(meal, MealType::Brunch);
        assert!(serde_json::from_str::<MealType>(r#""Supper""#).is_err());
        assert!(serde_json::from_str::<MealType>(r#""lunch""#).is_err());
    }

    #[test]
    fn test_meal_type_display() {
        assert_eq!(MealType::Dinner.to_string(), "Dinner");
    }
}
