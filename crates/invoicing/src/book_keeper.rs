use tallybook_core::DomainResult;

use crate::invoice::{Invoice, InvoiceFactory, InvoiceLine};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

/// Orchestrates issuance: turns an [`InvoiceRequest`] into an [`Invoice`]
/// by pricing the tax for each requested item.
#[derive(Debug, Clone, Default)]
pub struct BookKeeper {
    factory: InvoiceFactory,
}

impl BookKeeper {
    pub fn new(factory: InvoiceFactory) -> Self {
        Self { factory }
    }

    /// Issue an invoice for the request.
    ///
    /// The tax policy is consulted exactly once per item, in insertion
    /// order; every item becomes exactly one line. A policy error aborts
    /// issuance and the partially built invoice is dropped, never returned.
    pub fn issuance(
        &self,
        request: InvoiceRequest,
        tax_policy: &dyn TaxPolicy,
    ) -> DomainResult<Invoice> {
        let (client, items) = request.into_parts();
        let mut invoice = self.factory.create(client);

        for item in items {
            let tax = tax_policy.calculate_tax(item.product.product_type(), &item.total_cost)?;
            invoice.add_line(InvoiceLine { item, tax });
        }

        tracing::debug!(
            invoice_id = %invoice.invoice_id(),
            client = invoice.client().name(),
            lines = invoice.lines().len(),
            "invoice issued"
        );

        Ok(invoice)
    }
}
