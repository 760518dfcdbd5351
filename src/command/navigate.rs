// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

use super::{report, Shell};

/// Start a live stream (sellers only).
#[derive(Debug, Parser)]
pub(crate) struct GoLive {}

#[async_trait]
impl super::Command for GoLive {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.go_live());
        Ok(())
    }
}

/// Watch a live stream (viewers only).
#[derive(Debug, Parser)]
pub(crate) struct Watch {
    /// The ID of the stream, as listed on your dashboard.
    #[clap()]
    pub(crate) stream_id: String,
}

#[async_trait]
impl super::Command for Watch {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.watch_stream(&self.stream_id));
        Ok(())
    }
}

/// Go back to your dashboard.
#[derive(Debug, Parser)]
pub(crate) struct Back {}

#[async_trait]
impl super::Command for Back {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.return_to_dashboard());
        Ok(())
    }
}

/// Open your cart and checkout summary (viewers only).
#[derive(Debug, Parser)]
pub(crate) struct ViewCart {}

#[async_trait]
impl super::Command for ViewCart {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.view_cart());
        Ok(())
    }
}
