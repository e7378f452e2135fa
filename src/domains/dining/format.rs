//! Markdown rendering of menus and option listings.

use super::items::MenuItem;
use super::options::DiningOptions;

/// Render a menu for display to a model or a person.
///
/// An empty item list is reported as "no menu found" rather than an error:
/// the page gives no way to tell a closed hall from an unserved meal.
pub fn format_menu(location: &str, date: &str, meal_type: &str, items: &[MenuItem]) -> String {
    if items.is_empty() {
        return format!(
            "No menu found for **{location}** on {date} ({meal_type}).\n\
             The dining hall may be closed or this meal may not be served."
        );
    }

    let mut lines = vec![format!("## {location}"), format!("**{meal_type}** — {date}\n")];
    lines.extend(items.iter().map(format_item));
    lines.join("\n")
}

fn format_item(item: &MenuItem) -> String {
    let badges = badges(item);
    if badges.is_empty() {
        format!("- {}", item.name)
    } else {
        format!("- {} [{}]", item.name, badges.join(", "))
    }
}

/// Dietary badges for an item. Vegan supersedes the vegetarian badge.
pub fn badges(item: &MenuItem) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if item.vegan {
        badges.push("Vegan");
    } else if item.vegetarian {
        badges.push("V");
    }
    if item.gluten_free {
        badges.push("GF");
    }
    if item.kosher {
        badges.push("Kosher");
    }
    if item.halal {
        badges.push("Halal");
    }
    badges
}

/// Render the option listing returned by the options tool.
pub fn format_options(options: &DiningOptions) -> String {
    let mut lines = vec![
        "## Stanford Dining Options\n".to_string(),
        "### Dining Halls".to_string(),
    ];
    lines.extend(
        options
            .locations
            .iter()
            .map(|l| format!("- **{}** (value: `{}`)", l.label, l.value)),
    );

    lines.push(String::new());
    lines.push("### Available Dates".to_string());
    lines.extend(
        options
            .dates
            .iter()
            .map(|d| format!("- {} (value: `{}`)", d.label, d.value)),
    );

    lines.push(String::new());
    lines.push("### Meal Types".to_string());
    lines.extend(options.meal_types.iter().map(|m| format!("- {m}")));

    lines.push(String::new());
    lines.push("Use `get_dining_menu` with the **value** strings above.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::dining::items::DietaryFlag;
    use crate::domains::dining::options::{MealType, SelectOption};

    #[test]
    fn test_empty_menu_message() {
        let text = format_menu("Arrillaga", "2/26/2026", "Brunch", &[]);
        assert_eq!(
            text,
            "No menu found for **Arrillaga** on 2/26/2026 (Brunch).\n\
             The dining hall may be closed or this meal may not be served."
        );
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_menu_layout() {
        let items = vec![
            MenuItem::new("Rice Bowl").with_flag(DietaryFlag::GlutenFree),
            MenuItem::new("Tofu Stir Fry")
                .with_flag(DietaryFlag::Vegan)
                .with_flag(DietaryFlag::Vegetarian),
        ];
        let text = format_menu("Arrillaga", "2/26/2026", "Lunch", &items);
        assert_eq!(
            text,
            "## Arrillaga\n**Lunch** — 2/26/2026\n\n- Rice Bowl [GF]\n- Tofu Stir Fry [Vegan]"
        );
    }

    #[test]
    fn test_vegan_hides_vegetarian_badge() {
        let item = MenuItem::new("Lentil Soup")
            .with_flag(DietaryFlag::Vegetarian)
            .with_flag(DietaryFlag::Vegan);
        let badges = badges(&item);
        assert!(badges.contains(&"Vegan"));
        assert!(!badges.contains(&"V"));
    }

    #[test]
    fn test_badge_order() {
        let item = MenuItem::new("Falafel")
            .with_flag(DietaryFlag::Halal)
            .with_flag(DietaryFlag::Kosher)
            .with_flag(DietaryFlag::GlutenFree)
            .with_flag(DietaryFlag::Vegetarian);
        assert_eq!(badges(&item), vec!["V", "GF", "Kosher", "Halal"]);
    }

    #[test]
    fn test_item_without_flags_has_no_brackets() {
        let text = format_menu("Wilbur", "3/1/2026", "Dinner", &[MenuItem::new("Pot Roast")]);
        let last = text.lines().last().unwrap();
        assert_eq!(last, "- Pot Roast");
        assert!(!text.contains('['));
    }

    #[test]
    fn test_format_options() {
        let options = DiningOptions {
            locations: vec![SelectOption::new("101", "Arrillaga")],
            dates: vec![SelectOption::new("2/26/2026", "Feb 26")],
            meal_types: MealType::ALL.to_vec(),
        };
        let text = format_options(&options);

        assert!(text.starts_with("## Stanford Dining Options\n\n### Dining Halls\n"));
        assert!(text.contains("- **Arrillaga** (value: `101`)"));
        assert!(text.contains("- Feb 26 (value: `2/26/2026`)"));
        assert!(text.contains("### Meal Types\n- Breakfast\n- Lunch\n- Dinner\n- Brunch\n"));
        assert!(text.ends_with("Use `get_dining_menu` with the **value** strings above."));
    }
}
