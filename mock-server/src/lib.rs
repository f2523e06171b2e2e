use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
}

#[derive(Deserialize)]
pub struct CreateIssue {
    pub title: String,
    pub body: Option<String>,
}

#[derive(Deserialize)]
pub struct EditIssue {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Issues per `(owner, repo)`, ordered by number.
pub type Db = Arc<RwLock<BTreeMap<(String, String), Vec<Issue>>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/", get(index))
        .route("/users/{owner}/repos", get(user_repos))
        .route("/repos/{owner}/{repo}/issues", post(create_issue))
        .route(
            "/repos/{owner}/{repo}/issues/{number}",
            get(get_issue).patch(edit_issue),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn index() -> Json<Value> {
    Json(json!({
        "user_repositories_url": "/users/{user}/repos",
        "issues_url": "/repos/{owner}/{repo}/issues",
    }))
}

async fn user_repos(State(db): State<Db>, Path(owner): Path<String>) -> Json<Vec<Repo>> {
    let issues = db.read().await;
    let repos = issues
        .keys()
        .filter(|(repo_owner, _)| *repo_owner == owner)
        .map(|(repo_owner, name)| Repo {
            name: name.clone(),
            full_name: format!("{repo_owner}/{name}"),
        })
        .collect();
    Json(repos)
}

async fn create_issue(
    State(db): State<Db>,
    Path((owner, repo)): Path<(String, String)>,
    Json(input): Json<CreateIssue>,
) -> (StatusCode, Json<Issue>) {
    let mut issues = db.write().await;
    let list = issues.entry((owner, repo)).or_default();
    let issue = Issue {
        number: list.len() as u64 + 1,
        title: input.title,
        body: input.body,
        state: "open".to_string(),
    };
    debug!(number = issue.number, "created issue");
    list.push(issue.clone());
    (StatusCode::CREATED, Json(issue))
}

async fn get_issue(
    State(db): State<Db>,
    Path((owner, repo, number)): Path<(String, String, u64)>,
) -> Result<Json<Issue>, StatusCode> {
    let issues = db.read().await;
    issues
        .get(&(owner, repo))
        .and_then(|list| list.iter().find(|issue| issue.number == number))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn edit_issue(
    State(db): State<Db>,
    Path((owner, repo, number)): Path<(String, String, u64)>,
    Form(input): Form<EditIssue>,
) -> Result<Json<Issue>, StatusCode> {
    let mut issues = db.write().await;
    let issue = issues
        .get_mut(&(owner, repo))
        .and_then(|list| list.iter_mut().find(|issue| issue.number == number))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        issue.title = title;
    }
    if let Some(body) = input.body {
        issue.body = Some(body);
    }
    Ok(Json(issue.clone()))
}
