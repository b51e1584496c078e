//! Container identities and single-winner selection.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ContainerError;

/// The containers this buildpack ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// WildFly provisioned by Galleon from `WEB-INF/provisioning.xml`.
    Galleon,
    /// WildFly unpacked from the archive named in `wildfly-custom.yml`.
    WildflyCustom,
}

impl ContainerKind {
    /// Detection order.
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Galleon, ContainerKind::WildflyCustom];

    /// Sandbox directory name (`.java-buildpack/<name>`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Galleon => "galleon",
            ContainerKind::WildflyCustom => "wildfly_custom",
        }
    }

    /// Dash-case identifier used in detection tags and on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ContainerKind::Galleon => "galleon",
            ContainerKind::WildflyCustom => "wildfly-custom",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContainerKind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "galleon" => Ok(ContainerKind::Galleon),
            "wildfly-custom" | "wildfly_custom" => Ok(ContainerKind::WildflyCustom),
            other => Err(ContainerError::Unknown(other.to_string())),
        }
    }
}

/// Tag for a versioned dependency component: `<id>=<version>`.
#[must_use]
pub fn versioned_tag(kind: ContainerKind, version: &str) -> String {
    format!("{}={version}", kind.id())
}

/// A container that claimed an application, with its detection tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub kind: ContainerKind,
    pub tag: String,
}

/// Pick the only claim, rejecting zero or several.
///
/// `app` names the application in the "none applicable" error.
///
/// # Errors
///
/// Returns [`ContainerError::NoneApplicable`] for no claims and
/// [`ContainerError::Ambiguous`] for more than one.
pub fn select_winner(claims: Vec<Claim>, app: &str) -> Result<Claim, ContainerError> {
    let mut claims = claims.into_iter();
    match (claims.next(), claims.next()) {
        (None, _) => Err(ContainerError::NoneApplicable(app.to_string())),
        (Some(only), None) => Ok(only),
        (Some(first), Some(second)) => {
            let mut tags = vec![first.tag, second.tag];
            tags.extend(claims.map(|c| c.tag));
            Err(ContainerError::Ambiguous(tags))
        }
    }
}
