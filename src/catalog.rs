// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use rust_decimal::Decimal;
use tabled::Tabled;

use crate::live::{Listing, Product};

/// A stream that is always live for viewers to browse.
#[derive(Debug, Tabled)]
pub(crate) struct MockStream {
    #[tabled(rename = "ID")]
    pub(crate) id: &'static str,
    #[tabled(rename = "Seller")]
    pub(crate) seller_name: &'static str,
    #[tabled(rename = "Category")]
    pub(crate) category: &'static str,
    #[tabled(rename = "Watching")]
    pub(crate) viewer_count: u32,
    /// Name and price in cents.
    #[tabled(skip)]
    pub(crate) products: &'static [(&'static str, i64)],
}

impl MockStream {
    pub(crate) fn listing(&self) -> Listing {
        self.products
            .iter()
            .filter_map(|&(name, cents)| Product::new(name, Decimal::new(cents, 2)).ok())
            .collect()
    }
}

pub(crate) static STREAMS: [MockStream; 4] = [
    MockStream {
        id: "1",
        seller_name: "Fashion Forward",
        category: "Fashion",
        viewer_count: 245,
        products: &[("Summer Floral Dress", 8999), ("Denim Jacket", 6450)],
    },
    MockStream {
        id: "2",
        seller_name: "Tech Gadgets Pro",
        category: "Electronics",
        viewer_count: 189,
        products: &[("Wireless Bluetooth Headphones", 12999), ("Phone Stand", 1999)],
    },
    MockStream {
        id: "3",
        seller_name: "Home & Decor",
        category: "Home",
        viewer_count: 156,
        products: &[("Ceramic Vase", 4200), ("Linen Throw Pillow", 2499)],
    },
    MockStream {
        id: "4",
        seller_name: "Beauty Essentials",
        category: "Beauty",
        viewer_count: 298,
        products: &[("Organic Face Cream", 3499), ("Vitamin C Serum", 2750)],
    },
];

pub(crate) fn find(id: &str) -> Option<&'static MockStream> {
    STREAMS.iter().find(|stream| stream.id == id.trim())
}
