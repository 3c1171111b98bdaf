//! Connection settings for the PostgreSQL store.
//!
//! Host, port and database name default to fixed values; credentials are
//! supplied by the caller (the binary reads them from the `user` and `pass`
//! environment variables). Nothing in this module touches the environment.

use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "recording";

/// Environment variable holding the database user name.
pub const USER_ENV: &str = "user";
/// Environment variable holding the database password.
pub const PASSWORD_ENV: &str = "pass";

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dbname: DEFAULT_DB_NAME.to_string(),
            user: String::new(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    pub fn with_credentials(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Render a libpq-style key/value connection string. Empty credentials are
    /// left out so the server reports the missing field instead of rejecting
    /// an empty one.
    pub fn connection_string(&self) -> String {
        let mut parts = vec![
            format!("host={}", quote_value(&self.host)),
            format!("port={}", self.port),
            format!("dbname={}", quote_value(&self.dbname)),
        ];
        if !self.user.is_empty() {
            parts.push(format!("user={}", quote_value(&self.user)));
        }
        if !self.password.is_empty() {
            parts.push(format!("password={}", quote_value(&self.password)));
        }
        parts.join(" ")
    }

    /// Short `host:port/dbname` label used in logs and connection errors.
    pub fn target(&self) -> String {
        format!("postgres://{}:{}/{}", self.host, self.port, self.dbname)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Values containing whitespace, quotes or backslashes must be single-quoted
/// with `\` escapes.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
