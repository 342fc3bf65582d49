// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List response normalization.

use serde::Deserialize;

/// A list endpoint's body: either a paginated envelope or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// `{"items": [...]}`; pagination fields such as `total` are ignored
    Paged { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paged { items } => items,
            Listing::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_envelope() {
        let listing: Listing<u32> =
            serde_json::from_value(json!({ "items": [1, 2], "total": 10 })).unwrap();
        assert_eq!(listing.into_items(), vec![1, 2]);
    }

    #[test]
    fn test_bare_array() {
        let listing: Listing<u32> = serde_json::from_value(json!([3, 4, 5])).unwrap();
        assert_eq!(listing.into_items(), vec![3, 4, 5]);
    }

    #[test]
    fn test_neither_shape_fails() {
        assert!(serde_json::from_value::<Listing<u32>>(json!({ "data": [] })).is_err());
    }
}
