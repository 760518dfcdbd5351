// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, live::Product};

use super::{report, Shell};

/// List a product on your stream and feature it (sellers only).
#[derive(Debug, Parser)]
pub(crate) struct AddProduct {
    /// The price, for example 12.50 or $12.50.
    #[clap(allow_hyphen_values = true)]
    pub(crate) price: String,

    /// The product name.
    #[clap(required = true)]
    pub(crate) name: Vec<String>,
}

#[async_trait]
impl super::Command for AddProduct {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        let price = Product::parse_price(&self.price)?;
        let product = Product::new(&self.name.join(" "), price)?;
        report(shell.controller.add_product(product));
        Ok(())
    }
}

/// Feature one of the products on your stream (sellers only).
#[derive(Debug, Parser)]
pub(crate) struct Feature {
    /// The index shown next to the product.
    #[clap()]
    pub(crate) index: usize,
}

#[async_trait]
impl super::Command for Feature {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.feature_product(self.index));
        Ok(())
    }
}

/// Screenshot the featured product into your cart (viewers only).
#[derive(Debug, Parser)]
pub(crate) struct Capture {}

#[async_trait]
impl super::Command for Capture {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.capture_product());
        Ok(())
    }
}

/// Remove an item from your cart (viewers only).
#[derive(Debug, Parser)]
pub(crate) struct Remove {
    /// The index shown next to the item.
    #[clap()]
    pub(crate) index: usize,
}

#[async_trait]
impl super::Command for Remove {
    async fn execute(self, shell: &mut Shell) -> Result<()> {
        report(shell.controller.remove_cart_item(self.index));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error,
        password::tests::Scripted,
        session::Role,
        storage::Memory,
    };

    use super::{super::Command as _, *};

    #[tokio::test]
    async fn bad_price_is_a_validation_error() -> Result<()> {
        let mut shell = Shell::new(Box::new(Memory::new()), Box::new(Scripted::new(&[])));
        assert!(shell
            .controller
            .authenticate("s@b.com", Some(Role::Seller))?
            .is_applied());
        assert!(shell.controller.go_live().is_applied());

        let result = AddProduct {
            price: "-4".to_owned(),
            name: vec!["Mug".to_owned()],
        }
        .execute(&mut shell)
        .await;
        assert!(matches!(
            result,
            Err(error::Error::Validation(error::Validation::InvalidPrice(ref raw))) if raw == "-4"
        ));
        assert!(shell
            .controller
            .view()
            .live
            .is_some_and(|live| live.listing().products().is_empty()));
        Ok(())
    }
}
