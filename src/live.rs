// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::error::Validation;

pub(crate) fn format_price(price: &Decimal) -> String {
    format!("${:.2}", price)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Tabled)]
pub(crate) struct Product {
    #[tabled(skip)]
    id: Uuid,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price", display_with = "format_price")]
    price: Decimal,
}

impl Product {
    pub(crate) fn new(name: &str, price: Decimal) -> Result<Self, Validation> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Validation::EmptyProductName);
        }
        if price.is_sign_negative() || price.normalize().scale() > 2 {
            return Err(Validation::InvalidPrice(price.to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            price,
        })
    }

    /// Accepts `12`, `12.5`, `12.50` and `$12.50`.
    pub(crate) fn parse_price(raw: &str) -> Result<Decimal, Validation> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        Decimal::from_str(digits)
            .ok()
            .filter(|price| !price.is_sign_negative() && price.normalize().scale() <= 2)
            .ok_or_else(|| Validation::InvalidPrice(raw.to_owned()))
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) const fn price(&self) -> Decimal {
        self.price
    }
}

/// Products shown on a stream. The last product added is featured until
/// another one is picked.
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct Listing {
    products: Vec<Product>,
    featured: Option<usize>,
}

impl Listing {
    pub(crate) fn add(&mut self, product: Product) {
        self.products.push(product);
        self.featured = Some(self.products.len() - 1);
    }

    pub(crate) fn feature(&mut self, index: usize) -> bool {
        if index < self.products.len() {
            self.featured = Some(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn featured(&self) -> Option<&Product> {
        self.featured
            .and_then(|index| self.products.get(index))
            .or_else(|| self.products.first())
    }

    pub(crate) fn products(&self) -> &[Product] {
        &self.products
    }
}

impl FromIterator<Product> for Listing {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
            featured: None,
        }
    }
}

/// What the controller knows about the stream on screen.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct LiveSession {
    stream_id: String,
    host: String,
    listing: Listing,
}

impl LiveSession {
    pub(crate) fn new(stream_id: String, host: String, listing: Listing) -> Self {
        Self {
            stream_id,
            host,
            listing,
        }
    }

    pub(crate) fn stream_id(&self) -> &str {
        &self.stream_id
    }

    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    pub(crate) const fn listing(&self) -> &Listing {
        &self.listing
    }

    pub(crate) fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }
}
