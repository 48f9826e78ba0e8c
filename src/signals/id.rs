//! # Signal identifiers.
//!
//! [`SignalId`] names the OS signals an adapter can subscribe to. Named
//! variants cover the conventional shutdown/control signals; [`SignalId::Raw`]
//! carries a platform signal number for anything else.
//!
//! ## Parsing
//! `FromStr` accepts, case-insensitively:
//! - the full name (`SIGINT`);
//! - the name without prefix (`INT`);
//! - the descriptive name (`interrupt`);
//! - a positive decimal number (`10` → `Raw(10)`).
//!
//! ```rust
//! use sigcancel::SignalId;
//!
//! assert_eq!("sigterm".parse::<SignalId>().unwrap(), SignalId::Terminate);
//! assert_eq!("HUP".parse::<SignalId>().unwrap(), SignalId::Hangup);
//! assert_eq!("34".parse::<SignalId>().unwrap(), SignalId::Raw(34));
//! assert_eq!(SignalId::Interrupt.to_string(), "SIGINT");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::SignalError;

/// Identifier of an OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalId {
    /// `SIGINT`, Ctrl-C on a terminal.
    Interrupt,
    /// `SIGTERM`, the default kill signal (systemd, Kubernetes).
    Terminate,
    /// `SIGQUIT`.
    Quit,
    /// `SIGHUP`.
    Hangup,
    /// `SIGUSR1`.
    User1,
    /// `SIGUSR2`.
    User2,
    /// Platform signal number.
    Raw(i32),
}

impl SignalId {
    /// All named variants.
    pub const NAMED: [SignalId; 6] = [
        SignalId::Interrupt,
        SignalId::Terminate,
        SignalId::Quit,
        SignalId::Hangup,
        SignalId::User1,
        SignalId::User2,
    ];

    /// Conventional name, or `None` for [`SignalId::Raw`].
    pub fn name(&self) -> Option<&'static str> {
        match self {
            SignalId::Interrupt => Some("SIGINT"),
            SignalId::Terminate => Some("SIGTERM"),
            SignalId::Quit => Some("SIGQUIT"),
            SignalId::Hangup => Some("SIGHUP"),
            SignalId::User1 => Some("SIGUSR1"),
            SignalId::User2 => Some("SIGUSR2"),
            SignalId::Raw(_) => None,
        }
    }

    fn alias(&self) -> Option<&'static str> {
        match self {
            SignalId::Interrupt => Some("interrupt"),
            SignalId::Terminate => Some("terminate"),
            SignalId::Quit => Some("quit"),
            SignalId::Hangup => Some("hangup"),
            SignalId::User1 => Some("user1"),
            SignalId::User2 => Some("user2"),
            SignalId::Raw(_) => None,
        }
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalId::Raw(n) => write!(f, "signal {n}"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl FromStr for SignalId {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i32>() {
            if n > 0 {
                return Ok(SignalId::Raw(n));
            }
        }

        let upper = trimmed.to_ascii_uppercase();
        let short = upper.strip_prefix("SIG").unwrap_or(&upper);
        SignalId::NAMED
            .iter()
            .copied()
            .find(|id| {
                id.name().and_then(|n| n.strip_prefix("SIG")) == Some(short)
                    || id.alias().is_some_and(|a| a.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| SignalError::UnknownName { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_spellings() {
        for (input, want) in [
            ("SIGINT", SignalId::Interrupt),
            ("int", SignalId::Interrupt),
            ("Interrupt", SignalId::Interrupt),
            (" SIGTERM ", SignalId::Terminate),
            ("quit", SignalId::Quit),
            ("SIGHUP", SignalId::Hangup),
            ("usr1", SignalId::User1),
            ("user2", SignalId::User2),
            ("15", SignalId::Raw(15)),
        ] {
            assert_eq!(input.parse::<SignalId>().unwrap(), want, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for input in ["", "SIG", "SIGFOO", "0", "-2", "interrupted"] {
            let err = input.parse::<SignalId>().unwrap_err();
            assert_eq!(err.as_label(), "signal_unknown_name", "input {input:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SignalId::User1.to_string(), "SIGUSR1");
        assert_eq!(SignalId::Raw(40).to_string(), "signal 40");
    }

    #[test]
    fn test_display_parses_back_for_named() {
        for id in SignalId::NAMED {
            assert_eq!(id.to_string().parse::<SignalId>().unwrap(), id);
        }
    }
}
