// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Store key holding the signed-in user between runs.
pub(crate) const KEY: &str = "livesell.user";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    Seller,
    Viewer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.to_possible_value().ok_or(std::fmt::Error)?;
        write!(f, "{}", value.get_name())
    }
}

/// Who is signed in. Doubles as the persisted session record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct UserIdentity {
    identifier: String,
    role: Role,
}

impl UserIdentity {
    pub(crate) fn new(identifier: &str, role: Role) -> Self {
        Self {
            identifier: identifier.trim().to_owned(),
            role,
        }
    }

    pub(crate) fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) const fn role(&self) -> Role {
        self.role
    }

    /// The local part of an e-mail style identifier.
    pub(crate) fn display_name(&self) -> &str {
        self.identifier
            .split_once('@')
            .map_or(self.identifier.as_str(), |(local, _)| local)
    }

    pub(crate) fn to_record(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a stored record, returning `None` when it is not one we wrote.
    pub(crate) fn from_record(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(user) if !user.identifier.trim().is_empty() => Some(user),
            Ok(_) => {
                debug!("Session record has an empty identifier");
                None
            }
            Err(e) => {
                debug!("Session record could not be parsed: {}", e);
                None
            }
        }
    }
}
