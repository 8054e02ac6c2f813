//! Authentication strategies for generated clients.
//!
//! The strategy is fixed for a whole generation run. It decides which
//! credential fields the generated client's constructor takes and how every
//! generated method attaches those credentials to its request.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Authentication strategy for a generated client.
///
/// ## Examples
///
/// Parse from a CLI value (case-insensitive):
///
/// ```
/// use std::str::FromStr;
/// use swagger2sdk_define::AuthStrategy;
///
/// assert_eq!(AuthStrategy::from_str("Bearer").unwrap(), AuthStrategy::Bearer);
/// assert_eq!(AuthStrategy::Basic.to_string(), "basic");
/// ```
///
/// Constructor fields implied by each strategy:
///
/// ```
/// use swagger2sdk_define::AuthStrategy;
///
/// assert!(AuthStrategy::None.credential_fields().is_empty());
/// assert_eq!(AuthStrategy::Basic.credential_fields(), &["username", "password"]);
/// assert_eq!(AuthStrategy::Bearer.credential_fields(), &["token"]);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthStrategy {
    /// No credentials. The client only needs a base URL.
    #[default]
    None,

    /// HTTP Basic authentication.
    ///
    /// The client stores a username and password and sends them as a
    /// basic-auth credential pair on every request.
    Basic,

    /// Bearer token authentication.
    ///
    /// Generates: `Authorization: Bearer <token>`
    Bearer,
}

impl AuthStrategy {
    /// Returns the constructor fields this strategy adds after the base URL.
    pub fn credential_fields(&self) -> &'static [&'static str] {
        match self {
            AuthStrategy::None => &[],
            AuthStrategy::Basic => &["username", "password"],
            AuthStrategy::Bearer => &["token"],
        }
    }
}
