// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use tabled::{
    settings::{object::Cell, Format, Modify, Style},
    Table, Tabled,
};

use crate::{
    cart::Cart,
    catalog,
    controller::{NavState, View},
    live::{format_price, LiveSession},
    metadata,
    session::{Role, UserIdentity},
};

#[derive(Tabled)]
struct CartRow<'item> {
    #[tabled(rename = "Product")]
    product: &'item str,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Seller")]
    seller: &'item str,
    #[tabled(rename = "Captured")]
    captured: String,
}

fn indexed<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new((0_u32..).zip(rows))
        .with(Style::rounded())
        .with(Modify::new(Cell::new(0, 0)).with(Format::content(|_| "Index".to_owned())))
        .to_string()
}

fn sign_in() -> String {
    format!(
        "Welcome to {}!\n\
         Sign in with `login <email>`, or create an account with `register <email> <seller|viewer>`.",
        *metadata::CLIENT_DISPLAY_NAME
    )
}

fn dashboard(user: &UserIdentity, cart: &Cart) -> String {
    let mut out = format!("Hello, {}!\n", user.display_name());
    match user.role() {
        Role::Seller => {
            out.push_str("You are not live. Start a stream with `go-live`.");
        }
        Role::Viewer => {
            _ = writeln!(
                out,
                "Live now:\n{}",
                Table::new(&catalog::STREAMS).with(Style::rounded())
            );
            _ = write!(
                out,
                "Watch a stream with `watch <id>`, or open your cart ({} items) with `cart`.",
                cart.items().len()
            );
        }
    }
    out
}

fn live(user: &UserIdentity, live: &LiveSession) -> String {
    let mut out = format!("● LIVE {} with {}\n", live.stream_id(), live.host());
    let listing = live.listing();
    if listing.products().is_empty() {
        out.push_str("No products are listed yet.\n");
    } else {
        _ = writeln!(out, "{}", indexed(listing.products()));
    }
    if let Some(product) = listing.featured() {
        _ = writeln!(
            out,
            "Featured: {} ({})",
            product.name(),
            format_price(&product.price())
        );
    }

    out.push_str(match user.role() {
        Role::Seller => {
            "List a product with `add-product <price> <name>`, pick one with `feature <index>`, or end the stream with `back`."
        }
        Role::Viewer => {
            "Capture the featured product with `capture`, open your cart with `cart`, or leave with `back`."
        }
    });
    out
}

fn cart(cart: &Cart, now: DateTime<Utc>) -> String {
    if cart.items().is_empty() {
        return "Your cart is empty. Capture products while watching a stream.\n\
                Go back with `back`."
            .to_owned();
    }

    let summary = cart.summary();
    let mut out = indexed(cart.items().iter().map(|item| CartRow {
        product: item.product_name(),
        price: format_price(&item.price()),
        seller: item.seller_name(),
        captured: item.time_ago(now),
    }));
    _ = write!(
        out,
        "\nSubtotal ({} items): {}\nTax ({}%): {}\nTotal: {}\n\
         Remove an item with `remove <index>`, or go back with `back`.",
        summary.items,
        format_price(&summary.subtotal),
        (Cart::tax_rate() * rust_decimal::Decimal::ONE_HUNDRED).normalize(),
        format_price(&summary.tax),
        format_price(&summary.total),
    );
    out
}

pub(crate) fn render(view: &View<'_>) -> String {
    match (view.nav_state, view.user, view.live) {
        (NavState::Dashboard, Some(user), _) => dashboard(user, view.cart),
        (NavState::LiveView, Some(user), Some(session)) => live(user, session),
        (NavState::CartView, Some(_), _) => cart(view.cart, Utc::now()),
        (NavState::Unauthenticated | NavState::Dashboard | NavState::LiveView | NavState::CartView, ..) => {
            sign_in()
        }
    }
}
