use crate::bus::Channel;
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

/// Parsed identity claims of the signed-in user
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthClaims {
    /// Stable subject identifier
    #[serde(default, rename = "sub")]
    pub subject: Option<String>,

    /// Primary email address
    #[serde(default)]
    pub email: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Group memberships, used for org/team scoping
    #[serde(default)]
    pub groups: Vec<String>,
}

/// The signed-in session shared with every module
///
/// Written exclusively by the auth module and read by everyone else over
/// a [`Channel<AuthSession>`]. The bearer token is wrapped so it never
/// appears in logs or debug output.
#[derive(Clone, Debug)]
pub struct AuthSession {
    /// Bearer token relayed to the gateway with every request
    pub token: SecretString,
    /// Parsed identity claims
    pub claims: AuthClaims,
}

/// How long before a still-pending auth session is flagged as slow
pub const AUTH_SLOW_AFTER: Duration = Duration::from_secs(5);

/// How long to wait for an auth session before giving up entirely
pub const AUTH_GIVE_UP_AFTER: Duration = Duration::from_secs(30);

/// Outcome of waiting for the auth session at startup
#[derive(Debug)]
pub enum AuthWait {
    /// The session arrived promptly
    Ready(AuthSession),
    /// The session arrived after the slow-loading threshold
    ///
    /// The shell has already swapped in its "still signing you in" view
    /// by the time this resolves.
    SlowThenReady(AuthSession),
    /// No session arrived; render the signed-out view
    TimedOut,
}

/// Wait for the auth module to publish a session
///
/// The channel itself has no timeout; this composition helper layers the
/// shell's thresholds on top: after [`AUTH_SLOW_AFTER`] the caller should
/// show a long-loading indicator, after [`AUTH_GIVE_UP_AFTER`] it gives
/// up and the module tree renders its "please sign in" view.
pub async fn await_auth(channel: &Channel<AuthSession>) -> AuthWait {
    match timeout(AUTH_SLOW_AFTER, channel.get()).await {
        Ok(session) => AuthWait::Ready(session),
        Err(_) => {
            tracing::warn!(
                elapsed = ?AUTH_SLOW_AFTER,
                "auth session still pending, showing long-loading state"
            );
            match timeout(AUTH_GIVE_UP_AFTER - AUTH_SLOW_AFTER, channel.get()).await {
                Ok(session) => AuthWait::SlowThenReady(session),
                Err(_) => {
                    tracing::warn!(elapsed = ?AUTH_GIVE_UP_AFTER, "gave up waiting for auth session");
                    AuthWait::TimedOut
                }
            }
        }
    }
}
