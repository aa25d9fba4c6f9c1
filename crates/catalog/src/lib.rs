//! Products catalog domain module.
//!
//! This crate contains the product snapshot data the sales domain works
//! with: a product's identity, price and tax category as they were at the
//! moment an order was placed. Catalog storage is out of scope.

pub mod product;

pub use product::{ProductData, ProductType};
