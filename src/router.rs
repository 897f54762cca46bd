use crate::domain::FilterCriteria;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::search::SharedBrowser;
use crate::templates::pages::{browse_page, BrowseVm};
use astra::Request;

pub fn handle(req: Request, browser: &SharedBrowser) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => render(browser),

        ("GET", "/search") => {
            let params = parse_query(&req);
            let query = params
                .iter()
                .find(|(k, _)| k == "q")
                .map(|(_, v)| v.as_str())
                .unwrap_or("");
            browser.text_search(query);
            render(browser)
        }

        ("GET", "/filter") => {
            let params = parse_query(&req);
            let profile = browser.with(|b| b.profile());
            let criteria = FilterCriteria::from_pairs(profile, params);
            // Validation errors are rendered inline by the page.
            let _ = browser.structured_search(criteria);
            render(browser)
        }

        ("POST", "/voice") => {
            // Failures are recorded as notices for the next render.
            let _ = browser.voice_search();
            redirect("/")
        }

        ("POST", "/voice/stop") => {
            browser.stop_voice_search();
            redirect("/")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn render(browser: &SharedBrowser) -> ResultResp {
    let voice_available = browser.voice_available();
    let markup = browser.with(|b| {
        let notices = b.reconciler_mut().take_notices();
        let vm = BrowseVm {
            display: b.display(),
            profile: b.profile(),
            criteria: b.criteria(),
            errors: b.errors(),
            search_query: b.reconciler().search_query(),
            listening: b.reconciler().is_listening(),
            voice_available,
            notices,
        };
        browse_page(&vm)
    });
    html_response(markup)
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
