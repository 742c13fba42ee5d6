// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{collections::HashMap, rc::Rc};

use query_decode::{QueryDecode, ValueError};

#[derive(Default, QueryDecode)]
pub struct Handle {
    pub id:     u64,
    pub shared: Rc<String>,
    pub extra:  HashMap<String, String>,
    secret:     String
}

fn main() {
    let handle = Handle::from_query(&[("id", "9")]).unwrap();
    assert_eq!(handle.id, 9);
    assert!(handle.secret.is_empty());

    let err = Handle::from_query(&[("shared", "x")]).err().unwrap();
    assert!(matches!(err.kind(), ValueError::UnsupportedType { .. }));

    let err = Handle::from_query(&[("secret", "x")]).err().unwrap();
    assert!(matches!(err.kind(), ValueError::UnsettableField));
    assert!(!Handle::FIELDS[3].settable);
}
