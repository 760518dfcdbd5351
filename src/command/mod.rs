// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use crate::{
    controller::{Controller, Transition},
    error::Result,
    password::Prompt,
    storage::Store,
    view,
};

pub(crate) mod account;
pub(crate) mod navigate;
pub(crate) mod shop;

/// What the shell drives: the controller and a way to ask for passwords.
pub(crate) struct Shell {
    pub(crate) controller: Controller<Box<dyn Store + Send>>,
    pub(crate) prompt: Box<dyn Prompt>,
}

impl Shell {
    pub(crate) fn new(store: Box<dyn Store + Send>, prompt: Box<dyn Prompt>) -> Self {
        Self {
            controller: Controller::new(store),
            prompt,
        }
    }

    pub(crate) fn render(&self) -> String {
        view::render(&self.controller.view())
    }
}

/// Tells the user why nothing happened.
pub(crate) fn report(transition: Transition) {
    if let Transition::Ignored(rejection) = transition {
        println!("{rejection}");
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, shell: &mut Shell) -> Result<()>;
}

#[derive(Debug, Subcommand)]
pub(crate) enum Event {
    Login(account::Login),
    Register(account::Register),
    Logout(account::Logout),
    GoLive(navigate::GoLive),
    Watch(navigate::Watch),
    Back(navigate::Back),
    Cart(navigate::ViewCart),
    AddProduct(shop::AddProduct),
    Feature(shop::Feature),
    Capture(shop::Capture),
    Remove(shop::Remove),
    /// Leave the shell. You stay signed in.
    #[command(alias = "exit")]
    Quit,
}

#[async_trait]
impl Command for Event {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.execute(shell).await,
            Self::Register(cmd) => cmd.execute(shell).await,
            Self::Logout(cmd) => cmd.execute(shell).await,
            Self::GoLive(cmd) => cmd.execute(shell).await,
            Self::Watch(cmd) => cmd.execute(shell).await,
            Self::Back(cmd) => cmd.execute(shell).await,
            Self::Cart(cmd) => cmd.execute(shell).await,
            Self::AddProduct(cmd) => cmd.execute(shell).await,
            Self::Feature(cmd) => cmd.execute(shell).await,
            Self::Capture(cmd) => cmd.execute(shell).await,
            Self::Remove(cmd) => cmd.execute(shell).await,
            Self::Quit => Ok(()),
        }
    }
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub(crate) struct Line {
    #[command(subcommand)]
    pub(crate) event: Event,
}

impl Line {
    pub(crate) fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}
