//! Menu item extraction from a query response page.
//!
//! The page carries no dietary data as such; each item row is styled with
//! marker classes (`clsVGN_Row`, `clsGF_Row`, ...) that are read back as
//! flags here.

use scraper::Html;

use super::selector::StaticSelector;

static MENU_ITEM: StaticSelector = StaticSelector::new("li.clsMenuItem");
static ITEM_NAME: StaticSelector = StaticSelector::new(".clsLabel_Name");

/// Dietary attributes the menu marks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryFlag {
    GlutenFree,
    Vegan,
    Vegetarian,
    Halal,
    Kosher,
}

/// Class substring to flag. Each marker is tested on its own.
const DIETARY_MARKERS: &[(&str, DietaryFlag)] = &[
    ("clsGF_Row", DietaryFlag::GlutenFree),
    ("clsVGN_Row", DietaryFlag::Vegan),
    ("clsV_Row", DietaryFlag::Vegetarian),
    ("clsHALAL_Row", DietaryFlag::Halal),
    ("clsKOSHER_Row", DietaryFlag::Kosher),
];

/// A dish on a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub gluten_free: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub kosher: bool,
    pub halal: bool,
}

impl MenuItem {
    /// Create an item with no dietary flags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an item, deriving its flags from the row's `class` attribute.
    pub fn from_classes(name: impl Into<String>, classes: &str) -> Self {
        DIETARY_MARKERS
            .iter()
            .filter(|(marker, _)| classes.contains(marker))
            .fold(Self::new(name), |item, (_, flag)| item.with_flag(*flag))
    }

    /// Return the item with one more flag set.
    pub fn with_flag(mut self, flag: DietaryFlag) -> Self {
        match flag {
            DietaryFlag::GlutenFree => self.gluten_free = true,
            DietaryFlag::Vegan => self.vegan = true,
            DietaryFlag::Vegetarian => self.vegetarian = true,
            DietaryFlag::Halal => self.halal = true,
            DietaryFlag::Kosher => self.kosher = true,
        }
        self
    }
}

/// Extract the menu items from a response page, in document order.
///
/// Rows without a visible name are layout filler and are skipped.
pub fn extract_items(html: &str) -> Vec<MenuItem> {
    let document = Html::parse_document(html);

    document
        .select(&MENU_ITEM)
        .filter_map(|row| {
            let name = row
                .select(&ITEM_NAME)
                .flat_map(|label| label.text())
                .collect::<String>();
            let name = name.trim();
            if name.is_empty() {
                return None;
            }

            let classes = row.value().attr("class").unwrap_or_default();
            Some(MenuItem::from_classes(name, classes))
        })
        .collect()
}
