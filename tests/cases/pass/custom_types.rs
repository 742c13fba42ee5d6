// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{collections::BTreeMap, num::ParseIntError};

use query_decode::{QueryDecode, QueryParse};

#[derive(Debug, Default, PartialEq)]
pub struct Range {
    pub start: i32,
    pub end:   i32
}

impl QueryParse for Range {
    type Error = ParseIntError;

    fn query_parse(&mut self, input: &str) -> Result<(), Self::Error> {
        let (start, end) = input.split_once("..").unwrap_or((input, input));
        self.start = start.parse()?;
        self.end = end.parse()?;
        Ok(())
    }
}

#[derive(Default, QueryDecode)]
pub struct Report<'a> {
    pub window:  Range,
    pub extra:   Option<Range>,
    pub buckets: Vec<Range>,
    pub label:   Option<&'a str>
}

fn main() {
    let mut query = BTreeMap::new();
    query.insert("window".to_string(), "1..5".to_string());
    query.insert("extra".to_string(), "7".to_string());
    query.insert("buckets".to_string(), "0..1,2..3".to_string());

    let report = Report::from_query(&query).unwrap();
    assert_eq!(report.window, Range { start: 1, end: 5 });
    assert_eq!(report.extra, Some(Range { start: 7, end: 7 }));
    assert_eq!(report.buckets.len(), 2);
    assert!(report.label.is_none());
}
