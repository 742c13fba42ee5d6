// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use query_decode::QueryDecode;

#[derive(Debug, Default, QueryDecode)]
pub struct Page {
    pub number: u32,
    pub size:   u8,
    pub sort:   String,
    pub desc:   bool,
    pub ratio:  f64
}

fn main() {
    let query = HashMap::from([("number", "3"), ("size", "50"), ("desc", "t")]);
    let page = Page::from_query(&query).unwrap();

    assert_eq!(page.number, 3);
    assert_eq!(page.size, 50);
    assert!(page.desc);
    assert!(page.sort.is_empty());
    assert_eq!(Page::FIELDS.len(), 5);
}
