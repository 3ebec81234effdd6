// Host-side tests for the browser-layer DOM hooks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn mount_attributes_share_one_namespace() {
    for attr in [PARALLAX_ATTR, PARALLAX_TARGET_ATTR, TICKER_ATTR, MOUNTED_ATTR] {
        assert!(attr.starts_with("data-hotc-"), "{attr}");
        assert!(
            attr.bytes().all(|b| b.is_ascii_lowercase() || b == b'-'),
            "{attr} must be a valid lowercase attribute name"
        );
    }
}

#[test]
fn mount_attributes_are_distinct() {
    let attrs = [PARALLAX_ATTR, PARALLAX_TARGET_ATTR, TICKER_ATTR, MOUNTED_ATTR];
    for (i, a) in attrs.iter().enumerate() {
        for b in &attrs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn no_handle_is_never_issued() {
    assert_eq!(NO_HANDLE, 0);
    assert!(FIRST_HANDLE > NO_HANDLE);
}

#[test]
fn reduced_motion_query_is_the_standard_media_feature() {
    assert_eq!(REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
}
