// Translation - code-to-pseudocode conversion with a result cache

pub mod cache;
pub mod credentials;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod service;
pub mod types;

pub use cache::TranslationCache;
pub use credentials::CredentialResolver;
pub use error::ConvertError;
pub use orchestrator::Converter;
pub use service::{ExplanationService, HttpExplanationService};
pub use types::ContentChange;
