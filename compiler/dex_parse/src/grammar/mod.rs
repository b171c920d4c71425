//! Grammar productions.
//!
//! Each module extends [`Parser`](crate::Parser) with the methods for one
//! kind of term:
//!
//! - [`literal`]: value sets, `name{a b c{d}}`
//! - [`function_map`]: dispatch maps, `name(key{program} ...)`
//! - [`declaration`]: `name < program` and `name > program`

mod declaration;
mod function_map;
mod literal;
