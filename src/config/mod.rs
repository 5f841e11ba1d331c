#[cfg(feature = "cli")]
pub mod cli;
pub mod credential;
pub mod settings;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use credential::{Credential, CredentialLoader};
pub use settings::{GeminiSettings, Settings};
