//! `.env` diagnostics shown when the credential is missing.

use std::path::Path;

use crate::API_KEY_ENV;

/// Conventional dotenv file, resolved against the working directory.
pub const DOTENV_FILE: &str = ".env";

/// What a `.env` file contributes to the credential lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotenvStatus {
    /// The file exists and could be opened.
    pub found: bool,
    /// The file assigns `OPENROUTER_API_KEY`, possibly to an empty value.
    pub has_api_key: bool,
}

impl DotenvStatus {
    /// Inspect `./.env`.
    #[must_use]
    pub fn detect() -> Self {
        Self::inspect(Path::new(DOTENV_FILE))
    }

    /// Inspect the dotenv file at `path` without touching the process
    /// environment. Lines that fail to parse are skipped.
    #[must_use]
    pub fn inspect(path: &Path) -> Self {
        match dotenvy::from_path_iter(path) {
            Ok(entries) => Self {
                found: true,
                has_api_key: entries
                    .filter_map(Result::ok)
                    .any(|(key, _)| key == API_KEY_ENV),
            },
            Err(_) => Self::default(),
        }
    }
}
