//! Order status model
//!
//! Status is persisted as a plain string. [`OrderStatus`] is the closed set
//! of known states with its transition table; [`StatusPolicy`] decides whether
//! that table is enforced before a write.
//!
//! ```text
//! new ──► preparing ──► served ──► paid
//!  │          │            │
//!  └──────────┴────────────┴─────► cancelled
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Preparing => "preparing",
            Self::Served => "served",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Whether `self -> next` is in the transition table.
    /// Re-applying the current non-terminal status is accepted as a no-op.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (from, to) if *from == to => !from.is_terminal(),
            (New, Preparing) | (Preparing, Served) | (Served, Paid) => true,
            (New | Preparing | Served, Cancelled) => true,
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Unknown order status '{0}'")]
    Unknown(String),

    #[error("Order status must not be empty")]
    Empty,

    #[error("Order status cannot change from '{from}' to '{to}'")]
    TransitionDenied { from: String, to: String },
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "preparing" => Ok(Self::Preparing),
            "served" => Ok(Self::Served),
            "paid" => Ok(Self::Paid),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "" => Err(StatusError::Empty),
            _ => Err(StatusError::Unknown(s.to_string())),
        }
    }
}

/// Whether status values and transitions are checked before persisting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any non-empty string, any transition (operator override)
    #[default]
    Permissive,
    /// Only [`OrderStatus`] values, only table transitions
    Strict,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown policy '{other}' (expected 'permissive' or 'strict')"
            )),
        }
    }
}

impl StatusPolicy {
    /// Status string to store for a new order
    pub fn initial(&self, requested: &str) -> Result<String, StatusError> {
        match self {
            Self::Permissive => non_empty(requested),
            Self::Strict => Ok(requested.parse::<OrderStatus>()?.as_str().to_string()),
        }
    }

    /// Status string to store when moving from `current` to `requested`.
    ///
    /// In strict mode an unrecognised stored status (written while the
    /// policy was permissive) is treated as `new`.
    pub fn transition(&self, current: &str, requested: &str) -> Result<String, StatusError> {
        match self {
            Self::Permissive => non_empty(requested),
            Self::Strict => {
                let to: OrderStatus = requested.parse()?;
                let from = current.parse::<OrderStatus>().unwrap_or(OrderStatus::New);
                if from.can_transition_to(to) {
                    Ok(to.as_str().to_string())
                } else {
                    Err(StatusError::TransitionDenied {
                        from: current.to_string(),
                        to: to.as_str().to_string(),
                    })
                }
            }
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

fn non_empty(s: &str) -> Result<String, StatusError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(StatusError::Empty);
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(New.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Served));
        assert!(Served.can_transition_to(Paid));
        assert!(New.can_transition_to(Cancelled));
        assert!(Served.can_transition_to(Cancelled));

        assert!(!New.can_transition_to(Served));
        assert!(!New.can_transition_to(Paid));
        assert!(!Served.can_transition_to(Preparing));
        assert!(!Paid.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(New));
    }

    #[test]
    fn test_same_status_is_noop_unless_terminal() {
        use OrderStatus::*;
        assert!(Preparing.can_transition_to(Preparing));
        assert!(!Paid.can_transition_to(Paid));
        assert!(!Cancelled.can_transition_to(Cancelled));
    }

    #[test]
    fn test_parse() {
        assert_eq!("  Served ".parse::<OrderStatus>(), Ok(OrderStatus::Served));
        assert_eq!("canceled".parse::<OrderStatus>(), Ok(OrderStatus::Cancelled));
        assert_eq!("".parse::<OrderStatus>(), Err(StatusError::Empty));
        assert_eq!(
            "on-hold".parse::<OrderStatus>(),
            Err(StatusError::Unknown("on-hold".into()))
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
    }

    #[test]
    fn test_permissive_policy_accepts_any_string() {
        let policy = StatusPolicy::Permissive;
        assert_eq!(policy.initial("new").unwrap(), "new");
        assert_eq!(policy.transition("paid", "on-hold").unwrap(), "on-hold");
        assert_eq!(policy.transition("on-hold", "new").unwrap(), "new");
        assert_eq!(policy.transition("new", "   "), Err(StatusError::Empty));
    }

    #[test]
    fn test_strict_policy() {
        let policy = StatusPolicy::Strict;
        assert_eq!(policy.initial("NEW").unwrap(), "new");
        assert!(matches!(policy.initial("on-hold"), Err(StatusError::Unknown(_))));

        assert_eq!(policy.transition("new", "Preparing").unwrap(), "preparing");
        assert_eq!(
            policy.transition("paid", "new"),
            Err(StatusError::TransitionDenied {
                from: "paid".into(),
                to: "new".into()
            })
        );
        // legacy free-form status behaves like `new`
        assert_eq!(policy.transition("on-hold", "preparing").unwrap(), "preparing");
        assert!(policy.transition("on-hold", "served").is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("STRICT".parse::<StatusPolicy>(), Ok(StatusPolicy::Strict));
        assert_eq!(
            "permissive".parse::<StatusPolicy>(),
            Ok(StatusPolicy::Permissive)
        );
        assert!("loose".parse::<StatusPolicy>().is_err());
        assert_eq!(StatusPolicy::default(), StatusPolicy::Permissive);
        assert!(StatusPolicy::Strict.is_strict());
    }
}
