// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the QueryDecode derive macro.
//!
//! Both levels are parsed with [`darling`]: the record through
//! `FromDeriveInput`, each field through `FromField`.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── record.rs - Record-level parsing (RecordDef)
//! └── field.rs  - Field-level parsing (FieldDef, #[query(alias = "...")])
//! ```
//!
//! # Data Structures
//!
//! ```text
//! RecordDef
//! ├── ident: Ident          (struct name, e.g., "Dest")
//! ├── generics: Generics    (lifetimes only)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident          (field name)
//!         ├── ty: Type              (declared type)
//!         ├── settable: bool        (has explicit visibility)
//!         └── alias: Option<String> (from #[query(alias = "...")])
//! ```

mod field;
mod record;

pub use field::FieldDef;
pub use record::RecordDef;
