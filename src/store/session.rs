//! Session gate between onboarding and the main app.
//!
//! The session identifier is not a credential. Its presence alone decides whether the
//! app shows onboarding or the tabbed main screens.

use super::LoadPhase;

/// Whether a session identifier is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No session id: the user sees onboarding
    Anonymous,
    /// Session id present
    Identified,
}

/// Where the app should send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Data still loading; don't route yet
    Pending,
    /// Splash, onboarding and login screens
    Onboarding,
    /// Tabbed main app
    Main,
}

/// Auth state for a session id. An empty id counts as absent.
#[must_use]
pub fn auth_state(session_id: Option<&str>) -> AuthState {
    match session_id {
        Some(id) if !id.is_empty() => AuthState::Identified,
        _ => AuthState::Anonymous,
    }
}

/// Route for the current load phase and session id.
#[must_use]
pub fn route_for(phase: LoadPhase, session_id: Option<&str>) -> Route {
    if phase != LoadPhase::Ready {
        return Route::Pending;
    }
    match auth_state(session_id) {
        AuthState::Anonymous => Route::Onboarding,
        AuthState::Identified => Route::Main,
    }
}
