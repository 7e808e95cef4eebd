// Converter - serves cached explanations or fetches fresh ones

use super::cache::TranslationCache;
use super::credentials::CredentialResolver;
use super::error::ConvertError;
use super::service::ExplanationService;
use crate::presentation::PresentationSurface;
use std::sync::Arc;

/// Orchestrates one conversion: cache lookup, then at most one request to
/// the explanation service, then cache store. The cache and service are
/// injected so hosts and tests own their lifetimes.
pub struct Converter {
    cache: Arc<TranslationCache>,
    service: Arc<dyn ExplanationService>,
    credentials: CredentialResolver,
}

impl Converter {
    pub fn new(
        cache: Arc<TranslationCache>,
        service: Arc<dyn ExplanationService>,
        credentials: CredentialResolver,
    ) -> Self {
        Self {
            cache,
            service,
            credentials,
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Convert a code fragment into pseudocode.
    ///
    /// Exactly one network call per cache miss and at most one cache
    /// mutation per call. Cache hits never touch the network and need no
    /// credential. Concurrent misses for the same fragment each make their
    /// own request; last store wins. Once dispatched, a request runs to
    /// completion or failure — there is no cancellation and no retry.
    pub async fn convert(&self, fragment: &str) -> Result<String, ConvertError> {
        if fragment.trim().is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        if let Some(explanation) = self.cache.lookup(fragment) {
            return Ok(explanation);
        }

        // Credential is only needed when we actually go to the network
        let credential = self
            .credentials
            .resolve()
            .ok_or(ConvertError::MissingCredential)?;

        let explanation = self.service.explain(fragment, &credential).await?;
        self.cache.store(fragment, explanation.clone());
        Ok(explanation)
    }

    /// Convert and forward the result to a presentation surface alongside
    /// the original fragment
    pub async fn convert_and_present(
        &self,
        fragment: &str,
        surface: &mut dyn PresentationSurface,
    ) -> Result<(), ConvertError> {
        let explanation = self.convert(fragment).await?;
        surface.present(&explanation, Some(fragment));
        Ok(())
    }
}
