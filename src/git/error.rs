//! Git error handling
//!
//! Turns libgit2 errors into short, categorized reasons. The original
//! libgit2 message is always kept so operators can diagnose from the logs.

use git2::{Error, ErrorClass};

#[derive(Clone, Copy)]
enum Category {
    RepositoryNotFound,
    BranchNotFound,
    AuthenticationFailed,
    ProxyError,
    NetworkError,
    CertificateError,
    Other,
}

type ErrorCheck = fn(&str, ErrorClass) -> bool;

const CLASSIFICATIONS: &[(ErrorCheck, Category)] = &[
    (
        |msg, class| class == ErrorClass::Reference || msg.contains("remote branch"),
        Category::BranchNotFound,
    ),
    (
        |msg, _| msg.contains("not found") || msg.contains("404"),
        Category::RepositoryNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        Category::AuthenticationFailed,
    ),
    (
        |msg, class| class == ErrorClass::Net && msg.contains("proxy"),
        Category::ProxyError,
    ),
    (
        |msg, _| {
            msg.contains("connection")
                || msg.contains("network")
                || msg.contains("resolve")
                || msg.contains("timed out")
        },
        Category::NetworkError,
    ),
    (
        |msg, class| {
            (class == ErrorClass::Http || class == ErrorClass::Ssl)
                && (msg.contains("certificate") || msg.contains("ssl"))
        },
        Category::CertificateError,
    ),
];

fn classify(msg: &str, class: ErrorClass) -> Category {
    CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(msg, class))
        .map_or(Category::Other, |(_, category)| *category)
}

/// Interpret a git2 error and provide a categorized message
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    let prefix = match classify(&message, err.class()) {
        Category::RepositoryNotFound => "Repository not found",
        Category::BranchNotFound => "Branch not found",
        Category::AuthenticationFailed => "Authentication failed",
        Category::ProxyError => "Proxy error",
        Category::NetworkError => "Network error",
        Category::CertificateError => "Certificate error",
        Category::Other => return err.message().to_string(),
    };

    format!("{prefix}: {}", err.message())
}
