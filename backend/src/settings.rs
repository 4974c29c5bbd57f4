//! Environment-driven server settings.
//!
//! Variables are read through [`mockable::Env`] so parsing can be tested
//! without touching the process environment. Blank values count as unset.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mockable::Env;

use crate::outbound::persistence::DEFAULT_MAX_SIZE;

const HOST_ENV: &str = "HOST";
const PORT_ENV: &str = "PORT";
const DATABASE_URL_ENV: &str = "DATABASE_URL";
const POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while validating server settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: u32,
}

impl ServerSettings {
    /// Build settings from `HOST`, `PORT`, `DATABASE_URL` and
    /// `DB_POOL_MAX_SIZE`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::MockEnv;
    /// use users_api::settings::ServerSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PORT" => Some("8080".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = ServerSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 8080);
    /// assert!(settings.database_url.is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEnv`] when a variable cannot be parsed.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let host = match read(env, HOST_ENV) {
            Some(value) => value.parse::<IpAddr>().map_err(|_| SettingsError::InvalidEnv {
                name: HOST_ENV,
                value,
                expected: "an IPv4 or IPv6 address",
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = parse_number(env, PORT_ENV, DEFAULT_PORT, "a port number")?;
        let pool_max_size = parse_number(
            env,
            POOL_MAX_SIZE_ENV,
            DEFAULT_MAX_SIZE,
            "a positive integer",
        )?;
        if pool_max_size == 0 {
            return Err(SettingsError::InvalidEnv {
                name: POOL_MAX_SIZE_ENV,
                value: pool_max_size.to_string(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database_url: read(env, DATABASE_URL_ENV),
            pool_max_size,
        })
    }
}

fn read<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_number<E, T>(
    env: &E,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, SettingsError>
where
    E: Env,
    T: std::str::FromStr,
{
    match read(env, name) {
        Some(value) => value.parse().map_err(|_| SettingsError::InvalidEnv {
            name,
            value,
            expected,
        }),
        None => Ok(default),
    }
}
