// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::ProviderError;
use crate::process::CommandRunner;
use crate::settings::{CodeCommitSettings, GitlabSettings, Settings};

use super::{GitlabProvider, Provider, ProviderRegistry, repo_short_name};

fn gitlab_settings(api_base: &str) -> GitlabSettings {
    GitlabSettings {
        enabled: true,
        namespace: "42".to_string(),
        token: "secret-token".to_string(),
        api_base: api_base.to_string(),
    }
}

#[test]
fn short_name_strips_path_and_extension() {
    assert_eq!(repo_short_name("git@gitlab.com:group/tools.git"), "tools");
    assert_eq!(
        repo_short_name("https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/tools"),
        "tools"
    );
    assert_eq!(repo_short_name("ssh://host/group/deep/nested.git"), "nested");
    assert_eq!(repo_short_name("plain"), "plain");
}

#[test]
fn short_name_ignores_trailing_slash() {
    assert_eq!(repo_short_name("https://host/group/tools/"), "tools");
    assert_eq!(repo_short_name("ssh://host/group/tools.git/"), "tools");
}

#[test]
fn gitlab_matches_only_its_urls() {
    let provider = GitlabProvider::new(&gitlab_settings("https://gitlab.com/api/v4"));
    assert!(provider.matches("git@gitlab.example.org:group/tools.git"));
    assert!(!provider.matches("https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/tools"));
}

#[tokio::test]
async fn gitlab_create_posts_project_and_returns_clone_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/projects"))
        .and(header("PRIVATE-TOKEN", "secret-token"))
        .and(body_partial_json(serde_json::json!({
            "name": "tools",
            "namespace_id": 42,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 7,
            "ssh_url_to_repo": "git@gitlab.com:mirrors/tools.git",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GitlabProvider::new(&gitlab_settings(&format!("{}/api/v4", server.uri())));
    let clone_url = provider
        .create_repository("git@gitlab.com:mirrors/tools.git")
        .await
        .unwrap();

    assert_eq!(clone_url, "git@gitlab.com:mirrors/tools.git");
}

#[tokio::test]
async fn gitlab_create_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/projects"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"message":"insufficient scope"}"#),
        )
        .mount(&server)
        .await;

    let provider = GitlabProvider::new(&gitlab_settings(&format!("{}/api/v4", server.uri())));
    let err = provider
        .create_repository("git@gitlab.com:mirrors/tools.git")
        .await
        .unwrap_err();

    match err {
        ProviderError::Api {
            provider, status, ..
        } => {
            assert_eq!(provider, "gitlab");
            assert_eq!(status, 403);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn gitlab_delete_targets_url_encoded_project_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/projects/mirrors%2Ftools"))
        .and(header("PRIVATE-TOKEN", "secret-token"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GitlabProvider::new(&gitlab_settings(&format!("{}/api/v4", server.uri())));
    let deleted = provider
        .delete_repository("git@gitlab.com:mirrors/tools.git")
        .await
        .unwrap();

    assert!(deleted);
}

#[tokio::test]
async fn registry_reports_missing_provider() {
    let registry = ProviderRegistry::with_providers(Vec::new(), false);
    let err = registry
        .create_remote("https://nowhere.example.org/repo.git")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::NoProvider { .. }));
}

#[tokio::test]
async fn registry_dispatches_to_first_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "ssh_url_to_repo": "git@gitlab.com:mirrors/tools.git",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GitlabProvider::new(&gitlab_settings(&format!("{}/api/v4", server.uri())));
    let registry = ProviderRegistry::with_providers(vec![Box::new(provider)], false);

    let clone_url = registry
        .create_remote("git@gitlab.example.org:mirrors/tools.git")
        .await
        .unwrap();
    assert_eq!(clone_url, "git@gitlab.com:mirrors/tools.git");
}

#[tokio::test]
async fn registry_dry_run_never_calls_the_provider() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and fail the call.

    let provider = GitlabProvider::new(&gitlab_settings(&format!("{}/api/v4", server.uri())));
    let registry = ProviderRegistry::with_providers(vec![Box::new(provider)], true);

    let url = "git@gitlab.example.org:mirrors/tools.git";
    assert_eq!(registry.create_remote(url).await.unwrap(), url);
    assert!(registry.delete_remote(url).await.unwrap());
}

#[test]
fn registry_from_settings_honors_enabled_flags() {
    let settings = Settings::default();
    let registry = ProviderRegistry::from_settings(&settings, CommandRunner::new(false));
    assert!(registry.is_empty());

    let settings = Settings {
        gitlab: gitlab_settings("https://gitlab.com/api/v4"),
        codecommit: CodeCommitSettings {
            enabled: true,
            ..CodeCommitSettings::default()
        },
    };
    let registry = ProviderRegistry::from_settings(&settings, CommandRunner::new(false));
    assert!(!registry.is_empty());
}
