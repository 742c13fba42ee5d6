// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use query_decode::QueryDecode;

#[derive(QueryDecode)]
pub struct Page<T> {
    pub items: Vec<T>
}

fn main() {
    let page = Page::<u32> { items: Vec::new() };
    let _ = page.items;
}
