// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use secrecy::SecretString;

use crate::{
    auth::{Credentials, Registration},
    controller::Transition,
    error::{self, Result},
    password::{self, Prompt},
    session::Role,
};

use super::{report, Shell};

async fn ask(prompt: &dyn Prompt, label: &str) -> Result<SecretString> {
    let req = password::RequestBuilder::new()
        .with_label(label)
        .into_request();
    Ok(prompt
        .prompt(req)
        .await?
        .ok_or(error::Password::NoPrompt)?)
}

/// Sign in with an existing account.
#[derive(Debug, Parser)]
pub(crate) struct Login {
    /// Your e-mail address.
    #[clap()]
    pub(crate) email: String,

    /// Sign in as a seller or a viewer. Without it you shop as a viewer.
    #[arg(long = "as", value_enum)]
    pub(crate) role: Option<Role>,
}

#[async_trait]
impl super::Command for Login {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        let password = ask(shell.prompt.as_ref(), "Password").await?;
        let credentials = Credentials::new(&self.email, password)?;
        let transition = shell
            .controller
            .authenticate(credentials.email(), self.role)?;
        if self.role.is_none() && transition == Transition::Applied {
            println!(
                "Signed in as a viewer. Use `login {} --as seller` to sell.",
                credentials.email()
            );
        }
        report(transition);
        Ok(())
    }
}

/// Create an account and sign in with it.
#[derive(Debug, Parser)]
pub(crate) struct Register {
    /// Your e-mail address.
    #[clap()]
    pub(crate) email: String,

    /// Whether you want to sell on live streams or shop on them.
    #[arg(value_enum)]
    pub(crate) role: Role,
}

#[async_trait]
impl super::Command for Register {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        let password = ask(shell.prompt.as_ref(), "Password").await?;
        let confirmation = ask(shell.prompt.as_ref(), "Confirm password").await?;
        let registration = Registration::new(&self.email, password, &confirmation, self.role)?;
        report(
            shell
                .controller
                .authenticate(registration.email(), Some(registration.role()))?,
        );
        Ok(())
    }
}

/// Sign out and forget the saved session.
#[derive(Debug, Parser)]
pub(crate) struct Logout {}

#[async_trait]
impl super::Command for Logout {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        shell.controller.logout()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        controller::NavState,
        password::tests::Scripted,
        session::{self, UserIdentity},
        storage::{Memory, Store as _},
    };

    use super::{super::Command as _, *};

    fn shell(answers: &[&'static str]) -> Shell {
        Shell::new(Box::new(Memory::new()), Box::new(Scripted::new(answers)))
    }

    #[tokio::test]
    async fn mismatched_confirmation_stays_signed_out() {
        let mut shell = shell(&["hunter2", "hunter3"]);
        let result = Register {
            email: "a@b.com".to_owned(),
            role: Role::Seller,
        }
        .execute(&mut shell)
        .await;

        assert!(matches!(
            result,
            Err(error::Error::Validation(error::Validation::PasswordMismatch))
        ));
        assert_eq!(shell.controller.nav_state(), NavState::Unauthenticated);
        assert!(matches!(shell.controller.store().get(session::KEY), Ok(None)));
    }

    #[tokio::test]
    async fn login_persists_session() -> Result<()> {
        let mut shell = shell(&["hunter2"]);
        Login {
            email: " x@y.com ".to_owned(),
            role: None,
        }
        .execute(&mut shell)
        .await?;

        assert_eq!(shell.controller.nav_state(), NavState::Dashboard);
        let record = shell.controller.store().get(session::KEY)?;
        assert_eq!(
            record.as_deref().and_then(UserIdentity::from_record),
            Some(UserIdentity::new("x@y.com", Role::Viewer))
        );

        Logout {}.execute(&mut shell).await?;
        assert_eq!(shell.controller.store().get(session::KEY)?, None);
        Ok(())
    }

    #[tokio::test]
    async fn seller_names_their_role_when_signing_back_in() -> Result<()> {
        let mut shell = shell(&["hunter2", "hunter2", "hunter2", "hunter2"]);
        Register {
            email: "shop@b.com".to_owned(),
            role: Role::Seller,
        }
        .execute(&mut shell)
        .await?;
        Logout {}.execute(&mut shell).await?;

        Login {
            email: "shop@b.com".to_owned(),
            role: Some(Role::Seller),
        }
        .execute(&mut shell)
        .await?;
        assert_eq!(
            shell.controller.current_user(),
            Some(&UserIdentity::new("shop@b.com", Role::Seller))
        );
        Logout {}.execute(&mut shell).await?;

        Login {
            email: "shop@b.com".to_owned(),
            role: None,
        }
        .execute(&mut shell)
        .await?;
        assert_eq!(
            shell.controller.current_user().map(UserIdentity::role),
            Some(Role::Viewer)
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_prompt_means_no_sign_in() {
        let mut shell = shell(&[]);
        let result = Login {
            email: "x@y.com".to_owned(),
            role: None,
        }
        .execute(&mut shell)
        .await;

        assert!(matches!(
            result,
            Err(error::Error::Password(error::Password::NoPrompt))
        ));
        assert_eq!(shell.controller.current_user(), None);
    }
}
