//! Course CRUD.
//!
//! Deliberately mounted without the authorization gate; clients create and
//! edit courses before any account exists. DESIGN.md records this as a known
//! security gap.

pub mod delete;
pub mod get;
pub mod post;
pub mod put;
