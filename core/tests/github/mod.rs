//! GitHub API subset described as an `Endpoint`, shared by the integration
//! tests.

#![allow(dead_code)]

use route_sugar::{Associate, Endpoint, Headers, JsonEncoding, ParameterMap, Parameters, Route, SugarError, UrlEncoding};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

pub const BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum GitHubApi {
    Url {
        url: String,
    },
    Index,
    UserRepos {
        owner: String,
    },
    CreateIssue {
        owner: String,
        repo: String,
        title: String,
        body: Option<String>,
    },
    EditIssue {
        owner: String,
        repo: String,
        number: u64,
        title: Option<String>,
        body: Option<String>,
    },
}

impl Endpoint for GitHubApi {
    fn base_url(&self) -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    fn route(&self) -> Route {
        match self {
            GitHubApi::Url { url } => Route::get(url.clone()),
            GitHubApi::Index => Route::get(""),
            GitHubApi::UserRepos { owner } => Route::get(format!("/users/{owner}/repos")),
            GitHubApi::CreateIssue { owner, repo, .. } => {
                Route::post(format!("/repos/{owner}/{repo}/issues"))
            }
            GitHubApi::EditIssue {
                owner, repo, number, ..
            } => Route::patch(format!("/repos/{owner}/{repo}/issues/{number}")),
        }
    }

    fn url(&self) -> Result<Url, SugarError> {
        match self {
            GitHubApi::Url { url } => Ok(Url::parse(url)?),
            _ => Ok(self.default_url()),
        }
    }

    fn params(&self) -> Option<Parameters> {
        match self {
            GitHubApi::Url { .. } | GitHubApi::Index | GitHubApi::UserRepos { .. } => None,
            GitHubApi::CreateIssue { title, body, .. } => Some(
                JsonEncoding::default().with(filter_null(json!({ "title": title, "body": body }))),
            ),
            GitHubApi::EditIssue { title, body, .. } => Some(
                UrlEncoding::default().with(filter_null(json!({ "title": title, "body": body }))),
            ),
        }
    }

    fn headers(&self) -> Option<Headers> {
        Some(Headers::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )]))
    }
}

/// Object entries of `value` with nulls removed.
pub fn filter_null(value: Value) -> ParameterMap {
    match value {
        Value::Object(map) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        _ => ParameterMap::new(),
    }
}
