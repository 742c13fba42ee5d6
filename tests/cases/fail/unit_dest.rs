// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use query_decode::QueryDecode;

#[derive(QueryDecode)]
pub struct Marker;

fn main() {
    let _ = Marker;
}
