pub mod config;
pub mod handlers;
pub mod services;
pub mod types;

use services::OrganizerService;

/// Shared handler state, built once at startup. The model client behind the
/// organizer is injected here rather than constructed per request.
pub struct AppState {
    pub organizer: OrganizerService,
}
