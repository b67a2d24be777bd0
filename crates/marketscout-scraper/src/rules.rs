//! Selector fallback tables for Etsy search and shop pages.
//!
//! These are heuristics tuned against live markup and are expected to need
//! adjustment when the site changes class names. Keep the ordering: earlier
//! rules are the more specific/stable selectors, later rules are data
//! attributes that survive styling refactors.

use crate::select::FieldRule;

pub(crate) const LISTING_TITLE: &[FieldRule] = &[
    FieldRule {
        selector: "h3",
        attr: None,
    },
    FieldRule {
        selector: ".title",
        attr: None,
    },
    FieldRule {
        selector: "[data-title]",
        attr: Some("data-title"),
    },
];

pub(crate) const LISTING_PRICE: &[FieldRule] = &[
    FieldRule {
        selector: ".currency-value",
        attr: None,
    },
    FieldRule {
        selector: "[data-price]",
        attr: Some("data-price"),
    },
];

pub(crate) const LISTING_SHOP: &[FieldRule] = &[
    FieldRule {
        selector: ".shop-name",
        attr: None,
    },
    FieldRule {
        selector: "[data-shop]",
        attr: Some("data-shop"),
    },
];

pub(crate) const LISTING_REVIEWS: &[FieldRule] = &[FieldRule {
    selector: ".reviews",
    attr: None,
}];

pub(crate) const SHOP_SALES: &[FieldRule] = &[
    FieldRule {
        selector: ".shop-sales",
        attr: None,
    },
    FieldRule {
        selector: "[data-sales]",
        attr: Some("data-sales"),
    },
];

pub(crate) const SHOP_RATING: &[FieldRule] = &[
    FieldRule {
        selector: ".stars-svg",
        attr: Some("aria-label"),
    },
    FieldRule {
        selector: ".rating",
        attr: None,
    },
];

pub(crate) const SHOP_LISTING_COUNT: &[FieldRule] = &[FieldRule {
    selector: ".listing-count",
    attr: None,
}];

pub(crate) const SHOP_JOINED: &[FieldRule] = &[FieldRule {
    selector: ".shop-open-date",
    attr: None,
}];
