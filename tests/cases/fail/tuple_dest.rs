// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use query_decode::QueryDecode;

#[derive(QueryDecode)]
pub struct Range(pub u32, pub u32);

fn main() {
    let _ = Range(1, 2);
}
