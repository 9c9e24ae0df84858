// Runtime configuration assembled from the command-line flags. The struct
// is passed explicitly to the commands and the API client.

use crate::cli::ConnectionArgs;
use anyhow::Result;
use dialoguer::Password;
use std::io::IsTerminal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Service base URL, always ending with `/`.
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub dry_run: bool,
    pub flat: bool,
}

impl Config {
    /// Build a config from the shared connection flags. Fails when `--url`
    /// is missing or empty.
    pub fn from_args(conn: &ConnectionArgs) -> Result<Self> {
        let url = mandatory("url", conn.url.as_deref())?;
        Ok(Config {
            url: normalize_url(url),
            user: conn.user.clone().filter(|u| !u.is_empty()),
            password: conn.password.clone(),
            dry_run: false,
            flat: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// A user without a password, on a run that actually talks to the
    /// server.
    pub fn needs_password(&self) -> bool {
        self.user.is_some() && self.password.is_none() && !self.dry_run
    }

    /// Ask for the password on the terminal when `needs_password`.
    /// Non-interactive runs keep going with an empty password.
    pub fn prompt_missing_password(&mut self) -> Result<()> {
        if !self.needs_password() || !std::io::stdin().is_terminal() {
            return Ok(());
        }
        let user = self.user.as_deref().unwrap_or_default();
        // `Password` hides input in the terminal.
        let password = Password::new()
            .with_prompt(format!("Artifactory password for {}", user))
            .allow_empty_password(true)
            .interact()?;
        self.password = Some(password);
        Ok(())
    }
}

fn mandatory<'a>(flag: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => anyhow::bail!("The --{} flag is mandatory", flag),
    }
}

/// Append the trailing slash the request builders rely on.
pub fn normalize_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
