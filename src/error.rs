// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use thiserror::Error;

use crate::session::Role;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("storage error: {0}")]
    Storage(#[from] Storage),
    #[error("invalid input: {0}")]
    Validation(#[from] Validation),
    #[error("password retrieval error: {0}")]
    Password(#[from] Password),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

#[derive(Error, Debug)]
pub(crate) enum Storage {
    #[error(r#"key "{}" may only contain ASCII letters, digits, ".", "-" and "_""#, .0.escape_default())]
    InvalidKey(String),
    #[error(r#"the value stored under "{0}" is not text"#)]
    NotText(String),
    #[error("no data directory could be determined for this platform")]
    NoProjectDirs,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum Validation {
    #[error(r#""{}" is not an e-mail address"#, .0.escape_default())]
    InvalidEmail(String),
    #[error("a password is required")]
    EmptyPassword,
    #[error("passwords don't match")]
    PasswordMismatch,
    #[error("a product needs a name")]
    EmptyProductName,
    #[error(r#""{}" is not a valid price"#, .0.escape_default())]
    InvalidPrice(String),
}

#[derive(Error, Debug)]
pub(crate) enum Password {
    #[error("no password prompt available")]
    NoPrompt,
}

/// Reasons a transition is refused. A refused transition leaves the
/// controller exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    #[error("you need to sign in first")]
    NotAuthenticated,
    #[error("you are already signed in; sign out first")]
    AlreadyAuthenticated,
    #[error("only a {required} can do that (you are a {actual})")]
    WrongRole { required: Role, actual: Role },
    #[error("that isn't available from the current screen")]
    WrongScreen,
    #[error("there is no product to capture yet")]
    NothingToCapture,
    #[error("there is no item number {0}")]
    NoSuchItem(usize),
}
