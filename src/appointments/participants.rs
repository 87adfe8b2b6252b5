//! Boundary normalization for persisted participant shapes
//!
//! Older backend records stored participants as a flat array of email
//! strings, newer ones as objects with `email`/`name`, and a buggy
//! migration left some records with a one-level nested array. All
//! three shapes are normalized here, once, into a canonical list. The
//! union never leaves this module.

use serde::{Deserialize, Serialize};

/// Canonical participant entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The loosely-typed shapes a persisted participant can arrive in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredParticipant {
    Email(String),
    Entry {
        email: String,
        #[serde(default)]
        name: Option<String>,
    },
    Nested(Vec<StoredParticipant>),
}

fn flatten_entry(entry: &StoredParticipant) -> Option<Participant> {
    match entry {
        StoredParticipant::Email(email) => {
            let email = email.trim();
            if email.is_empty() {
                None
            } else {
                Some(Participant {
                    email: email.to_string(),
                    name: None,
                })
            }
        }
        StoredParticipant::Entry { email, name } => {
            let email = email.trim();
            if email.is_empty() {
                None
            } else {
                Some(Participant {
                    email: email.to_string(),
                    name: name.clone().filter(|n| !n.trim().is_empty()),
                })
            }
        }
        StoredParticipant::Nested(_) => {
            tracing::warn!("Dropping participant nested more than one level deep");
            None
        }
    }
}

/// Normalize persisted participants into a canonical list,
/// flattening one level of nesting and preserving order.
pub fn normalize_participants(stored: &[StoredParticipant]) -> Vec<Participant> {
    stored
        .iter()
        .flat_map(|entry| match entry {
            StoredParticipant::Nested(inner) => {
                inner.iter().filter_map(flatten_entry).collect::<Vec<_>>()
            }
            other => flatten_entry(other).into_iter().collect(),
        })
        .collect()
}
