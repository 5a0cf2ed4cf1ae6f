//! Target locations inside the frontend project

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the frontend root
pub const FRONTEND_DIR_ENV: &str = "BNF_FRONTEND_DIR";

/// Directory name of the frontend project under the home directory
pub const FRONTEND_DIR_NAME: &str = "bnf-frontend";

/// Market intel data hooks
pub const HOOKS_FILE: &str = "hooks/use-market-intel.ts";

/// Market intel type definitions
pub const TYPES_FILE: &str = "types/market-intel.ts";

/// Market intel dashboard component
pub const COMPONENT_FILE: &str = "components/market-intel.tsx";

/// Absolute path the API client patch has always targeted.
/// Only valid on the machine it was written for; pass `--file` elsewhere.
pub const DEFAULT_API_CLIENT_PATH: &str = "/home/mmendes/bnf-frontend/lib/api-client.ts";

/// Get the frontend project directory
///
/// Resolution order: explicit path, then `BNF_FRONTEND_DIR`, then `~/bnf-frontend`.
pub fn frontend_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = std::env::var_os(FRONTEND_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(FRONTEND_DIR_NAME))
}

/// Get the API client file to patch
pub fn api_client_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_API_CLIENT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_frontend_dir_wins() {
        let dir = frontend_dir(Some(Path::new("/srv/frontend"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/frontend"));
    }

    #[test]
    fn test_default_frontend_dir_ends_with_project_name() {
        // Only meaningful when the override is not set in the environment
        if std::env::var_os(FRONTEND_DIR_ENV).is_none() {
            let dir = frontend_dir(None).unwrap();
            assert!(dir.ends_with(FRONTEND_DIR_NAME));
        }
    }

    #[test]
    fn test_api_client_path_default() {
        assert_eq!(
            api_client_path(None),
            PathBuf::from("/home/mmendes/bnf-frontend/lib/api-client.ts")
        );
        assert_eq!(
            api_client_path(Some(Path::new("lib/api-client.ts"))),
            PathBuf::from("lib/api-client.ts")
        );
    }
}
