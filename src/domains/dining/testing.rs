//! In-process stand-in for the dining menu site, used by async tests.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{AppendHeaders, Html, IntoResponse},
    routing::get,
};

use crate::core::config::DiningConfig;

use super::client::DiningClient;

pub(crate) const MENU_PATH: &str = "/dininghallmenu/Menu.aspx";

/// Initial page load: hidden postback fields plus the option lists.
pub(crate) const OPTIONS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<form method="post" action="./Menu.aspx" id="ctl01">
  <input type="hidden" name="__EVENTTARGET" id="__EVENTTARGET" value="" />
  <input type="hidden" name="__EVENTARGUMENT" id="__EVENTARGUMENT" value="" />
  <input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="vs-token" />
  <input type="hidden" name="__VIEWSTATEGENERATOR" id="__VIEWSTATEGENERATOR" value="gen-token" />
  <input type="hidden" name="__EVENTVALIDATION" id="__EVENTVALIDATION" value="ev-token" />
  <select name="ctl00$MainContent$lstLocations" id="MainContent_lstLocations">
    <option value="101">Arrillaga</option>
    <option value="">--</option>
  </select>
  <select name="ctl00$MainContent$lstDay" id="MainContent_lstDay">
    <option value="2/26/2026">Feb 26</option>
  </select>
</form>
</body>
</html>"#;

/// Postback response with two dishes and one filler row.
pub(crate) const MENU_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<ul class="clsMenuList">
  <li class="clsMenuItem clsGF_Row"><span class="clsLabel_Name">Rice Bowl</span></li>
  <li class="clsMenuItem"><span class="clsLabel_Name"></span></li>
  <li class="clsMenuItem clsVGN_Row clsV_Row"><span class="clsLabel_Name">Tofu Stir Fry</span></li>
</ul>
</body>
</html>"#;

/// Page returned when nothing is served.
pub(crate) const EMPTY_MENU_PAGE: &str = "<html><body><p>No items</p></body></html>";

/// A postback received by the mock site.
#[derive(Debug, Clone)]
pub(crate) struct RecordedPost {
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    page_status: StatusCode,
    menu_status: StatusCode,
    menu_page: &'static str,
    posts: Arc<Mutex<Vec<RecordedPost>>>,
    page_cookies: Arc<Mutex<Vec<Option<String>>>>,
}

/// Configurable fake upstream, served on an ephemeral localhost port.
pub(crate) struct MockUpstream {
    pub url: String,
    posts: Arc<Mutex<Vec<RecordedPost>>>,
    page_cookies: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockUpstream {
    /// Serve [`OPTIONS_PAGE`] on GET and `menu_page` on POST.
    pub(crate) async fn start(menu_page: &'static str) -> Self {
        Self::with_status(StatusCode::OK, StatusCode::OK, menu_page).await
    }

    pub(crate) async fn with_status(
        page_status: StatusCode,
        menu_status: StatusCode,
        menu_page: &'static str,
    ) -> Self {
        let posts = Arc::new(Mutex::new(Vec::new()));
        let page_cookies = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            page_status,
            menu_status,
            menu_page,
            posts: posts.clone(),
            page_cookies: page_cookies.clone(),
        };

        let app = Router::new()
            .route(MENU_PATH, get(page).post(submit))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}{MENU_PATH}"),
            posts,
            page_cookies,
        }
    }

    /// A client pointed at this mock.
    pub(crate) fn client(&self) -> DiningClient {
        DiningClient::new(&self.config()).unwrap()
    }

    pub(crate) fn config(&self) -> DiningConfig {
        DiningConfig {
            menu_url: self.url.clone(),
            ..Default::default()
        }
    }

    pub(crate) fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().unwrap().clone()
    }

    /// `Cookie` header of every GET, in arrival order.
    pub(crate) fn page_cookies(&self) -> Vec<Option<String>> {
        self.page_cookies.lock().unwrap().clone()
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn page(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    state
        .page_cookies
        .lock()
        .unwrap()
        .push(header_string(&headers, header::COOKIE));

    (
        state.page_status,
        AppendHeaders([
            (header::SET_COOKIE, "ASP.NET_SessionId=abc123; path=/; HttpOnly"),
            (header::SET_COOKIE, "BIGipServerDining=xyz; Path=/"),
        ]),
        Html(OPTIONS_PAGE),
    )
}

async fn submit(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.posts.lock().unwrap().push(RecordedPost {
        cookie: header_string(&headers, header::COOKIE),
        content_type: header_string(&headers, header::CONTENT_TYPE),
        body,
    });

    (state.menu_status, Html(state.menu_page))
}
