// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use query_decode::QueryDecode;

#[derive(QueryDecode)]
pub enum Sort {
    Asc,
    Desc
}

fn main() {
    let _ = [Sort::Asc, Sort::Desc];
}
