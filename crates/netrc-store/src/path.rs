//! Locating the user's netrc file

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the netrc location.
pub const NETRC_ENV: &str = "NETRC";

/// File name of the netrc file inside the home directory.
pub fn netrc_file_name() -> &'static str {
    if cfg!(windows) { "_netrc" } else { ".netrc" }
}

/// The netrc path for the current user.
///
/// `$NETRC` wins when set and non-empty; otherwise the file in the home
/// directory. `None` when neither is available.
pub fn default_netrc_path() -> Option<PathBuf> {
    resolve(std::env::var_os(NETRC_ENV), dirs::home_dir())
}

fn resolve(env: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env.filter(|value| !value.is_empty()) {
        Some(value) => Some(PathBuf::from(value)),
        None => home.map(|home| home.join(netrc_file_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let resolved = resolve(
            Some(OsString::from("/etc/creds/netrc.gpg")),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/etc/creds/netrc.gpg")));
    }

    #[test]
    fn test_empty_env_falls_back_to_home() {
        let resolved = resolve(Some(OsString::new()), Some(PathBuf::from("/home/u")));
        assert_eq!(resolved, Some(PathBuf::from("/home/u").join(netrc_file_name())));
    }

    #[test]
    fn test_nothing_known() {
        assert_eq!(resolve(None, None), None);
    }
}
