// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use query_decode::QueryDecode;

#[allow(non_snake_case)]
#[derive(Default, QueryDecode)]
pub struct Filter {
    #[query(alias = "q")]
    pub Search:   String,
    #[query(alias = "per-page")]
    pub per_page: usize,
    pub r#type:   String
}

fn main() {
    let pairs = vec![("q", "rust"), ("per-page", "20"), ("type", "crate")];
    let filter = Filter::from_query(&pairs).unwrap();

    assert_eq!(filter.Search, "rust");
    assert_eq!(filter.per_page, 20);
    assert_eq!(filter.r#type, "crate");
    assert_eq!(Filter::FIELDS[0].key, "q");
    assert_eq!(Filter::FIELDS[2].key, "type");
}
