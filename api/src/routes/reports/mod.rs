pub mod get;
pub mod post;
pub mod put;
pub mod shape;
