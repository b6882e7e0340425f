//! Fixtures shared by the integration tests: a fake HN listing and login flow.
#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use hn_upvoted::config::Config;
use hn_upvoted::credentials::Credentials;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_COOKIE: &str = "user=pg&token123";

pub fn config_for(server: &MockServer, output: &Path) -> Config {
    let mut config = Config::new(&server.uri()).unwrap();
    config.delay = Duration::ZERO;
    config.output = output.to_path_buf();
    config
}

pub fn credentials() -> Credentials {
    Credentials {
        username: "pg".into(),
        password: "secret".into(),
    }
}

/// One listing page. Each item is `(id, title, href, epoch)`.
pub fn listing(items: &[(&str, &str, &str, &str)], more: Option<&str>) -> String {
    let rows: String = items
        .iter()
        .map(|(id, title, href, epoch)| {
            format!(
                r#"<tr class="athing submission" id="{id}"><td class="title"><span class="titleline"><a href="{href}">{title}</a></span></td></tr>
<tr><td class="subtext"><span class="age" title="2024-01-31T09:15:04 {epoch}"><a href="item?id={id}">1 day ago</a></span></td></tr>
<tr class="spacer"></tr>"#
            )
        })
        .collect();
    let more = more
        .map(|href| format!(r#"<tr><td class="title"><a href="{href}" class="morelink" rel="next">More</a></td></tr>"#))
        .unwrap_or_default();
    format!("<html><body><table>{rows}{more}</table></body></html>")
}

/// Login that redirects to /news and hands out the session cookie.
pub async fn mount_good_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("acct=pg"))
        .and(body_string_contains("pw=secret"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/news")
                .insert_header("set-cookie", format!("{SESSION_COOKIE}; Path=/")),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>front page</html>"))
        .mount(server)
        .await;
}
