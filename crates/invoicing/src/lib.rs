//! Invoicing domain module.
//!
//! This crate contains the business rules for issuing tax-inclusive
//! invoices, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The tax calculation itself is pluggable via the
//! [`TaxPolicy`] trait and injected per issuance call.

pub mod book_keeper;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use invoice::{Invoice, InvoiceFactory, InvoiceLine};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{RateTableTaxPolicy, Tax, TaxPolicy};
