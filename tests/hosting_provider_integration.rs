//! Integration tests for the hosting provider against a wiremock server

use chrono::NaiveDate;
use core::time::Duration;
use gh_trending_analyzer::config::TimeWindow;
use gh_trending_analyzer::facts::hosting::{IssueFilter, IssueQuery, IssueState, Provider, TrendingQuery};
use gh_trending_analyzer::facts::{ProviderResult, RepoSpec};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const README_BASE64: &str = "IyBXaWRnZXQKCkluc3RhbGxhdGlvbgpwaXAgaW5zdGFsbCB3aWRnZXQKClVzYWdl\nIGV4YW1wbGUKd2lkZ2V0IC0taGVscAoKRG9ja2VyIGRlcGxveW1lbnQK\n";

fn provider(server: &MockServer) -> Provider {
    Provider::new(None, server.uri(), Duration::from_secs(5)).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn widget() -> RepoSpec {
    RepoSpec::new("acme", "widget")
}

#[tokio::test]
async fn test_trending_search_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "items": [
                { "owner": { "login": "acme" }, "name": "widget", "stargazers_count": 900 },
                { "owner": { "login": "acme" }, "name": "gadget", "stargazers_count": 300 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = TrendingQuery::new(TimeWindow::Weekly, "rust", 5);
    let ProviderResult::Found(repos) = provider(&server).get_trending_repos(&query, today()).await else {
        panic!("expected search results");
    };

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name(), "widget");
    assert_eq!(repos[1].stars(), 300);

    let requests = server.received_requests().await.unwrap();
    let params: Vec<(String, String)> = requests[0].url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    let param = |key: &str| params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    assert_eq!(param("q"), Some("created:>=2024-06-08 stars:>100 sort:stars language:rust"));
    assert_eq!(param("sort"), Some("stars"));
    assert_eq!(param("order"), Some("desc"));
    assert_eq!(param("per_page"), Some("5"));
}

#[tokio::test]
async fn test_trending_search_without_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_count": 0 })))
        .mount(&server)
        .await;

    let query = TrendingQuery::new(TimeWindow::Daily, "", 5);
    let result = provider(&server).get_trending_repos(&query, today()).await;

    assert_eq!(result.as_ref().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_trending_search_keeps_items_around_a_malformed_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "owner": { "login": "acme" }, "name": "widget", "forks_count": "many" },
                null,
                { "owner": { "login": "acme" }, "name": "gadget", "license": ["MIT"] }
            ]
        })))
        .mount(&server)
        .await;

    let query = TrendingQuery::new(TimeWindow::Daily, "", 5);
    let ProviderResult::Found(repos) = provider(&server).get_trending_repos(&query, today()).await else {
        panic!("expected repositories");
    };

    let specs: Vec<RepoSpec> = repos.iter().filter_map(|r| r.repo_spec()).collect();
    assert_eq!(specs, vec![RepoSpec::new("acme", "widget"), RepoSpec::new("acme", "gadget")]);
    assert_eq!(repos[0].forks(), 0);
}

#[tokio::test]
async fn test_trending_search_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let query = TrendingQuery::new(TimeWindow::Daily, "", 5);
    let result = provider(&server).get_trending_repos(&query, today()).await;

    assert!(matches!(result, ProviderResult::Error(_)));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "widget", "stargazers_count": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = Provider::new(Some("secret-token"), server.uri(), Duration::from_secs(5)).unwrap();
    let result = provider.get_repo_details(&widget()).await;

    assert_eq!(result.as_ref().map(|d| d.stars()), Some(7));
}

#[tokio::test]
async fn test_repo_details_empty_object_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = provider(&server).get_repo_details(&widget()).await;
    assert!(matches!(result, ProviderResult::NotFound(_)));
}

#[tokio::test]
async fn test_repo_details_missing_repository() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;

    let ProviderResult::NotFound(reason) = provider(&server).get_repo_details(&widget()).await else {
        panic!("expected NotFound");
    };
    assert!(reason.contains("acme/widget"));
}

#[tokio::test]
async fn test_repo_issues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "Bug", "number": 5, "comments": 10, "state": "open" },
            { "title": "Fix", "number": 6, "comments": 4, "state": "closed", "pull_request": { "url": "x" } }
        ])))
        .mount(&server)
        .await;

    let query = IssueQuery::new(IssueFilter::All, 5);
    let ProviderResult::Found(issues) = provider(&server).get_repo_issues(&widget(), &query).await else {
        panic!("expected issues");
    };

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].state, IssueState::Open);
    assert!(!issues[0].is_pull_request());
    assert!(issues[1].is_pull_request());

    let requests = server.received_requests().await.unwrap();
    let query_string = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query_string.contains("state=all"));
    assert!(query_string.contains("per_page=5"));
    assert!(query_string.contains("sort=comments"));
    assert!(query_string.contains("direction=desc"));
}

#[tokio::test]
async fn test_repo_issues_tolerate_malformed_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "Bug", "number": 5, "comments": "ten", "state": "open" },
            "not an issue",
            { "title": "Fix", "number": 6, "pull_request": null }
        ])))
        .mount(&server)
        .await;

    let ProviderResult::Found(issues) = provider(&server).get_repo_issues(&widget(), &IssueQuery::new(IssueFilter::All, 5)).await
    else {
        panic!("expected issues");
    };

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].number, Some(5));
    assert_eq!(issues[0].comments, None);
    assert!(!issues[0].is_pull_request());
    assert!(issues[1].is_pull_request());
}

#[tokio::test]
async fn test_repo_details_with_non_object_license() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "widget",
            "stargazers_count": 42,
            "license": "MIT"
        })))
        .mount(&server)
        .await;

    let ProviderResult::Found(details) = provider(&server).get_repo_details(&widget()).await else {
        panic!("expected details");
    };
    assert_eq!(details.stars(), 42);
    assert!(details.has_license());
}

#[tokio::test]
async fn test_repo_issues_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/issues"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = provider(&server).get_repo_issues(&widget(), &IssueQuery::new(IssueFilter::All, 5)).await;
    assert!(matches!(result, ProviderResult::Error(_)));
}

#[tokio::test]
async fn test_readme_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "README.md",
            "encoding": "base64",
            "content": README_BASE64
        })))
        .mount(&server)
        .await;

    let ProviderResult::Found(text) = provider(&server).get_readme(&widget()).await else {
        panic!("expected README text");
    };

    assert!(text.starts_with("# Widget\n"));
    assert!(text.contains("Docker deployment"));
}

#[tokio::test]
async fn test_readme_with_invalid_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "encoding": "base64", "content": "!!not base64!!" })))
        .mount(&server)
        .await;

    let result = provider(&server).get_readme(&widget()).await;
    assert!(matches!(result, ProviderResult::Error(_)));
}

#[tokio::test]
async fn test_readme_missing_content_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "README.md" })))
        .mount(&server)
        .await;

    let result = provider(&server).get_readme(&widget()).await;
    assert!(matches!(result, ProviderResult::Error(_)));
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "name": "widget" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider = Provider::new(None, server.uri(), Duration::from_millis(100)).unwrap();
    let ProviderResult::Error(e) = provider.get_repo_details(&widget()).await else {
        panic!("expected a timeout error");
    };
    assert!(format!("{e:#}").contains("timed out"));
}
