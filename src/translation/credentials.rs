// Credential resolution with a fixed precedence order

/// Environment variable consulted when neither an explicit credential nor a
/// configured one is present.
pub const CREDENTIAL_ENV_VAR: &str = "GLOSS_API_KEY";

/// Resolves the API credential for the explanation service.
///
/// Precedence, decided once: explicit parameter, then the value stored in
/// configuration, then the environment variable. Blank values are treated
/// as absent at every level.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    explicit: Option<String>,
    configured: Option<String>,
    env_var: String,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self {
            explicit: None,
            configured: None,
            env_var: CREDENTIAL_ENV_VAR.to_string(),
        }
    }

    /// Credential passed directly by the caller; wins over everything
    pub fn with_explicit(mut self, credential: impl Into<String>) -> Self {
        self.explicit = Some(credential.into());
        self
    }

    /// Credential from the config file; wins over the environment
    pub fn with_configured(mut self, credential: Option<String>) -> Self {
        self.configured = credential;
        self
    }

    /// Override the environment variable name (used by tests)
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Resolve the credential, or `None` when no source provides one.
    /// Precedence: explicit parameter, then configured value, then env.
    pub fn resolve(&self) -> Option<String> {
        non_blank(self.explicit.clone())
            .or_else(|| non_blank(self.configured.clone()))
            .or_else(|| non_blank(std::env::var(&self.env_var).ok()))
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
