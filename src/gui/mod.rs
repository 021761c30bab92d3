// GUI module organization and public exports

// Main application state and UI logic
mod app;
// Reusable UI components (badges, banners, captions)
mod components;
// Copy-to-clipboard button and its feedback timer
mod copy_button;
// Folder selection and method expansion state
pub mod state;

// Export AppState for use in main.rs
pub use app::AppState;
// Export all component functions
pub use components::*;
pub use copy_button::{CopyFeedback, CopyStatus, copy_button};
pub use state::DashboardState;
