// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod auth;
mod cart;
mod catalog;
mod command;
mod controller;
mod error;
mod live;
mod metadata;
mod password;
mod session;
mod storage;
mod view;

use std::{io::Write as _, path::PathBuf, process};

use clap::Parser;
use controller::Restore;
use error::Result;
use log::{error, warn};
use storage::{IsPersistent as _, Store};
use tokio::io::{self, AsyncBufReadExt as _, BufReader};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The directory to keep your saved session in. Defaults to the data
    /// directory for your platform.
    #[arg(long, env = "LIVESELL_STORE_DIR", value_hint = clap::ValueHint::DirPath)]
    store_dir: Option<PathBuf>,

    /// Forget the session when the shell exits.
    #[arg(long, conflicts_with = "store_dir")]
    ephemeral: bool,
}

fn open_store(args: &Args) -> Box<dyn Store + Send> {
    if args.ephemeral {
        return Box::new(storage::Memory::new());
    }

    if let Some(dir) = args.store_dir.as_ref() {
        return Box::new(storage::File::with_dir(dir));
    }

    match storage::File::new() {
        Ok(file_storage) => Box::new(file_storage),
        Err(e) => {
            warn!("We need to fall back to memory storage because we can't find a place to save your session: {}", e);
            Box::new(storage::Memory::new())
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut shell = command::Shell::new(open_store(&args), Box::new(password::RpasswordPrompt));
    if !shell.controller.store().is_persistent() {
        warn!("Your session will be forgotten when you quit");
    }

    match shell.controller.restore_session()? {
        Restore::Corrupt => println!("Your saved session could not be read. Please sign in again."),
        Restore::Restored | Restore::Absent | Restore::Ignored(_) => {}
    }
    println!("{}", shell.render());

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match command::Line::parse_line(&line) {
            Ok(parsed) => parsed.event,
            Err(e) => {
                _ = e.print();
                continue;
            }
        };
        if let command::Event::Quit = event {
            break;
        }

        match command::Command::execute(event, &mut shell).await {
            Ok(()) => {}
            Err(error::Error::Validation(e)) => println!("{e}"),
            Err(e) => error!("We could not do that: {}", e),
        }
        println!("{}", shell.render());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("LIVESELL_LOG", "warn")
        .write_style("LIVESELL_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
