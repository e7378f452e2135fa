//! Menu query postback.

use tracing::{debug, info, instrument};

use super::client::DiningClient;
use super::error::DiningResult;
use super::items::{MenuItem, extract_items};
use super::options::MealType;
use super::session::SessionHandle;

/// Controls inside the page's `MainContent` placeholder are posted under
/// their ASP.NET unique ids.
macro_rules! main_content_field {
    ($control:literal) => {
        concat!("ctl00$MainContent$", $control)
    };
}

const LOCATION_FIELD: &str = main_content_field!("lstLocations");
const DAY_FIELD: &str = main_content_field!("lstDay");
const MEAL_TYPE_FIELD: &str = main_content_field!("lstMealType");
const REFRESH_BUTTON_FIELD: &str = main_content_field!("btnRefresh");

/// Without the button field the server ignores the selection fields.
const REFRESH_BUTTON_VALUE: &str = "Refresh";

/// A single menu lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuQuery {
    /// Location value as listed by the options page, e.g. `Arrillaga`.
    pub location: String,
    /// Date in `M/D/YYYY` form, passed through unchecked.
    pub date: String,
    pub meal_type: MealType,
}

/// Form fields for a menu postback, in submission order.
pub fn query_form<'a>(
    session: &'a SessionHandle,
    query: &'a MenuQuery,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("__EVENTTARGET", ""),
        ("__EVENTARGUMENT", ""),
        ("__VIEWSTATE", session.view_state.as_str()),
        ("__VIEWSTATEGENERATOR", session.view_state_generator.as_str()),
        ("__EVENTVALIDATION", session.event_validation.as_str()),
        (LOCATION_FIELD, query.location.as_str()),
        (DAY_FIELD, query.date.as_str()),
        (MEAL_TYPE_FIELD, query.meal_type.as_str()),
        (REFRESH_BUTTON_FIELD, REFRESH_BUTTON_VALUE),
    ]
}

impl DiningClient {
    /// Spend a session on one menu query and return the raw response page.
    ///
    /// The response body is not inspected here.
    #[instrument(skip(self, session))]
    pub async fn submit_query(
        &self,
        session: SessionHandle,
        query: &MenuQuery,
    ) -> DiningResult<String> {
        let body = serde_urlencoded::to_string(query_form(&session, query))?;
        let response = self.post_form(body, &session.cookie).await?;
        Ok(response.text().await?)
    }

    /// Look up the items served for one location, date and meal.
    pub async fn fetch_menu(&self, query: &MenuQuery) -> DiningResult<Vec<MenuItem>> {
        info!(
            "Fetching {} menu for {} on {}",
            query.meal_type, query.location, query.date
        );

        let session = self.acquire_session().await?;
        let html = self.submit_query(session, query).await?;
        let items = extract_items(&html);

        debug!(count = items.len(), "Extracted menu items");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> MenuQuery {
        MenuQuery {
            location: "Arrillaga".to_string(),
            date: "2/26/2026".to_string(),
            meal_type: MealType::Lunch,
        }
    }

    fn session() -> SessionHandle {
        SessionHandle {
            view_state: "VS+/=".to_string(),
            view_state_generator: "GEN".to_string(),
            event_validation: "EV".to_string(),
            cookie: "ASP.NET_SessionId=abc".to_string(),
        }
    }

    #[test]
    fn test_query_form_fields() {
        let session = session();
        let query = query();
        let form = query_form(&session, &query);

        let names: Vec<_> = form.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "__EVENTTARGET",
                "__EVENTARGUMENT",
                "__VIEWSTATE",
                "__VIEWSTATEGENERATOR",
                "__EVENTVALIDATION",
                "ctl00$MainContent$lstLocations",
                "ctl00$MainContent$lstDay",
                "ctl00$MainContent$lstMealType",
                "ctl00$MainContent$btnRefresh",
            ]
        );
        assert_eq!(form[2].1, "VS+/=");
        assert_eq!(form[5].1, "Arrillaga");
        assert_eq!(form[7].1, "Lunch");
        assert_eq!(form[8].1, "Refresh");
    }

    #[test]
    fn test_query_form_encodes() {
        let session = session();
        let query = query();
        let body = serde_urlencoded::to_string(query_form(&session, &query)).unwrap();

        assert!(body.starts_with("__EVENTTARGET=&__EVENTARGUMENT=&__VIEWSTATE=VS%2B%2F%3D&"));
        assert!(body.contains("ctl00%24MainContent%24lstDay=2%2F26%2F2026"));
        assert!(body.ends_with("ctl00%24MainContent%24btnRefresh=Refresh"));
    }
}
