//! Dining domain: scraping the Stanford dining hall menu page.
//!
//! A lookup is a two-step postback exchange against one ASP.NET page:
//!
//! 1. [`DiningClient::acquire_session`] loads the page and captures its
//!    hidden `__VIEWSTATE` / `__VIEWSTATEGENERATOR` / `__EVENTVALIDATION`
//!    fields and session cookie as a [`SessionHandle`].
//! 2. [`DiningClient::submit_query`] consumes that handle in a form POST
//!    carrying the selected location, date and meal.
//!
//! The response page is turned into [`MenuItem`]s by [`extract_items`] and
//! rendered by [`format_menu`]. Nothing is cached between lookups.

mod client;
mod error;
mod format;
mod items;
mod options;
mod query;
mod selector;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DEFAULT_MENU_URL, DiningClient};
pub use error::{DiningError, DiningResult};
pub use format::{badges, format_menu, format_options};
pub use items::{DietaryFlag, MenuItem, extract_items};
pub use options::{DiningOptions, MealType, SelectOption};
pub use query::{MenuQuery, query_form};
pub use session::{SessionHandle, session_cookie};
