//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{Profile, RepositorySummary};

/// Fixed reference time so ordering by update time is deterministic
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap()
}

/// Create a non-fork repository updated `days_ago` days before the reference time
pub fn test_repo(id: i64, name: &str, stars: u64, days_ago: i64) -> RepositorySummary {
    RepositorySummary {
        id,
        name: name.to_string(),
        html_url: format!("https://github.com/octo/{}", name),
        description: Some(format!("The {} project", name)),
        language: Some("Rust".to_string()),
        stargazers_count: stars,
        forks_count: 0,
        updated_at: reference_time() - Duration::days(days_ago),
        homepage: None,
        fork: false,
    }
}

/// Create a forked repository
pub fn test_fork(id: i64, name: &str, stars: u64, days_ago: i64) -> RepositorySummary {
    RepositorySummary {
        fork: true,
        ..test_repo(id, name, stars, days_ago)
    }
}

/// Built-in profile pointed at the `octo` test account
pub fn test_profile() -> Profile {
    Profile::builtin().with_github_username("octo")
}

/// GitHub listing payload for the `octo` account.
///
/// Mirrors the shape GitHub returns, including fields the site ignores,
/// an empty homepage, and one entry without a `fork` key.
pub fn github_repos_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 101,
            "name": "portfolio",
            "full_name": "octo/portfolio",
            "html_url": "https://github.com/octo/portfolio",
            "description": "Personal site",
            "language": "TypeScript",
            "stargazers_count": 4,
            "forks_count": 1,
            "updated_at": "2025-12-03T10:00:00Z",
            "homepage": "https://starley.example.dev",
            "fork": false,
            "private": false
        },
        {
            "id": 102,
            "name": "notes",
            "full_name": "octo/notes",
            "html_url": "https://github.com/octo/notes",
            "description": null,
            "language": null,
            "stargazers_count": 4,
            "forks_count": 0,
            "updated_at": "2025-11-20T08:30:00Z",
            "homepage": "",
            "fork": false
        },
        {
            "id": 103,
            "name": "upstream-lib",
            "full_name": "octo/upstream-lib",
            "html_url": "https://github.com/octo/upstream-lib",
            "description": "A fork",
            "language": "Go",
            "stargazers_count": 50,
            "forks_count": 3,
            "updated_at": "2025-12-04T00:00:00Z",
            "homepage": null,
            "fork": true
        },
        {
            "id": 104,
            "name": "scripts",
            "full_name": "octo/scripts",
            "html_url": "https://github.com/octo/scripts",
            "description": "Shell <helpers> & more",
            "language": "Shell",
            "stargazers_count": 9,
            "forks_count": 2,
            "updated_at": "2025-06-15T14:00:00Z",
            "homepage": null
        }
    ])
}
