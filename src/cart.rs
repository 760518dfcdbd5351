// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use crate::live::Product;

#[derive(Clone, Debug, Serialize)]
pub(crate) struct CartItem {
    id: Uuid,
    product_name: String,
    price: Decimal,
    seller_name: String,
    captured_at: DateTime<Utc>,
}

impl CartItem {
    pub(crate) fn product_name(&self) -> &str {
        &self.product_name
    }

    pub(crate) const fn price(&self) -> Decimal {
        self.price
    }

    pub(crate) fn seller_name(&self) -> &str {
        &self.seller_name
    }

    pub(crate) fn time_ago(&self, now: DateTime<Utc>) -> String {
        let minutes = now.signed_duration_since(self.captured_at).num_minutes();
        if minutes < 1 {
            "Just now".to_owned()
        } else if minutes < 60 {
            format!("{minutes}m ago")
        } else {
            format!("{}h ago", minutes / 60)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    pub(crate) items: usize,
    pub(crate) subtotal: Decimal,
    pub(crate) tax: Decimal,
    pub(crate) total: Decimal,
}

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub(crate) fn tax_rate() -> Decimal {
        Decimal::new(8, 2)
    }

    pub(crate) fn capture(&mut self, product: &Product, seller_name: &str, at: DateTime<Utc>) {
        self.items.push(CartItem {
            id: Uuid::new_v4(),
            product_name: product.name().to_owned(),
            price: product.price(),
            seller_name: seller_name.to_owned(),
            captured_at: at,
        });
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<CartItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub(crate) fn summary(&self) -> Summary {
        let subtotal: Decimal = self.items.iter().map(CartItem::price).sum();
        let tax = (subtotal * Self::tax_rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Summary {
            items: self.items.len(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
