//! Application layer.
//!
//! # Structure
//!
//! - `settings.rs` - Persisted UI settings
//! - `filename.rs` / `mathmode.rs` - Pure helpers (sanitizer, math-mode detector)
//! - `render.rs` / `export.rs` - Renderer glue and file export
//! - `state.rs` - Main application coordinator
//! - `messages.rs` - Channel messages from widget callbacks

pub mod error;
pub mod export;
pub mod filename;
pub mod mathmode;
pub mod messages;
pub mod render;
pub mod samples;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::{AppSettings, Background, SaveFormat};
pub use state::AppState;
