//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are the same value. Identity does
/// not matter for them.
///
/// - `Money { amount: 10, currency: EUR }` is a value object: any other
///   instance with the same amount and currency is interchangeable with it.
/// - An invoice with an `InvoiceId` is an entity: two invoices with equal
///   contents but different ids are different invoices.
///
/// To "modify" a value object, construct a new one. The required bounds keep
/// value semantics honest:
/// - `Clone`: values are copied, not shared by reference
/// - `PartialEq`: values are compared attribute-by-attribute
/// - `Debug`: values show up readably in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
