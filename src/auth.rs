// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::{ExposeSecret as _, SecretString};
use subtle::ConstantTimeEq as _;

use crate::{error::Validation, session::Role};

fn validate_email(raw: &str) -> Result<String, Validation> {
    let email = raw.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email.to_owned())
    } else {
        Err(Validation::InvalidEmail(raw.to_owned()))
    }
}

/// A sign-in form that passed local validation.
pub(crate) struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    pub(crate) fn new(email: &str, password: SecretString) -> Result<Self, Validation> {
        let email = validate_email(email)?;
        if password.expose_secret().is_empty() {
            return Err(Validation::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }
}

/// A registration form that passed local validation.
pub(crate) struct Registration {
    credentials: Credentials,
    role: Role,
}

impl Registration {
    pub(crate) fn new(
        email: &str,
        password: SecretString,
        confirmation: &SecretString,
        role: Role,
    ) -> Result<Self, Validation> {
        let credentials = Credentials::new(email, password)?;
        let matches: bool = credentials
            .password
            .expose_secret()
            .as_bytes()
            .ct_eq(confirmation.expose_secret().as_bytes())
            .into();
        if !matches {
            return Err(Validation::PasswordMismatch);
        }
        Ok(Self { credentials, role })
    }

    pub(crate) fn email(&self) -> &str {
        self.credentials.email()
    }

    pub(crate) const fn role(&self) -> Role {
        self.role
    }
}
