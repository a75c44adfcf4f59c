//! Keystone v3 token request construction.
//!
//! Responsibilities:
//! - Translate an [`AuthConfig`] into the JSON body of `POST /v3/auth/tokens`.
//!
//! Does NOT handle:
//! - Sending the request or reading the issued token (see `endpoints::auth`).
//! - Reading credentials from the environment (see the config crate).
//!
//! Invariants:
//! - Secrets are exposed only while the body is built and never logged.
//! - Application credentials never carry an explicit scope.

use openstack_config::{
    ApplicationCredentialRef, AuthConfig, AuthMethod, DomainRef, Scope, UserRef,
};
use secrecy::ExposeSecret;
use serde_json::{Value, json};

fn domain_json(domain: &DomainRef) -> Value {
    match domain {
        DomainRef::Id(id) => json!({ "id": id }),
        DomainRef::Name(name) => json!({ "name": name }),
    }
}

fn user_json(user: &UserRef) -> Value {
    match user {
        UserRef::Id(id) => json!({ "id": id }),
        UserRef::Name { name, domain } => json!({ "name": name, "domain": domain_json(domain) }),
    }
}

fn identity_json(method: &AuthMethod) -> Value {
    match method {
        AuthMethod::Password { user, password } => {
            let mut user = user_json(user);
            user["password"] = Value::String(password.expose_secret().to_string());
            json!({ "methods": ["password"], "password": { "user": user } })
        }
        AuthMethod::ApplicationCredential { credential, secret } => {
            let mut cred = match credential {
                ApplicationCredentialRef::Id(id) => json!({ "id": id }),
                ApplicationCredentialRef::Name { name, user } => {
                    json!({ "name": name, "user": user_json(user) })
                }
            };
            cred["secret"] = Value::String(secret.expose_secret().to_string());
            json!({ "methods": ["application_credential"], "application_credential": cred })
        }
        AuthMethod::Token { token } => json!({
            "methods": ["token"],
            "token": { "id": token.expose_secret() }
        }),
    }
}

fn scope_json(scope: &Scope) -> Option<Value> {
    match scope {
        Scope::ProjectId(id) => Some(json!({ "project": { "id": id } })),
        Scope::ProjectName { name, domain } => Some(json!({
            "project": { "name": name, "domain": domain_json(domain) }
        })),
        Scope::Domain(domain) => Some(json!({ "domain": domain_json(domain) })),
        Scope::Unscoped => None,
    }
}

/// Build the `{"auth": {...}}` body for a token request.
pub(crate) fn token_request_body(auth: &AuthConfig) -> Value {
    let mut body = json!({ "identity": identity_json(&auth.method) });
    let scoped = !matches!(auth.method, AuthMethod::ApplicationCredential { .. });
    if scoped && let Some(scope) = scope_json(&auth.scope) {
        body["scope"] = scope;
    }
    json!({ "auth": body })
}
