use serde::{Deserialize, Serialize};

use tallybook_core::{Currency, DomainResult, Entity, InvoiceId, Money};
use tallybook_parties::ClientData;

use crate::request::RequestItem;
use crate::tax::Tax;

/// One billed item paired with its computed tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub item: RequestItem,
    pub tax: Tax,
}

/// The finalized billing document for a client.
///
/// Created empty by [`InvoiceFactory`], populated by the book keeper during
/// issuance, then handed to the caller. Lines cannot be appended from
/// outside this crate, so a returned invoice is effectively immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_id: InvoiceId,
    client: ClientData,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    /// Lines in issuance order.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub(crate) fn add_line(&mut self, line: InvoiceLine) {
        self.lines.push(line);
    }

    /// Sum of line costs, before tax.
    ///
    /// An invoice with no lines totals zero in the default currency.
    pub fn net_total(&self) -> DomainResult<Money> {
        let mut total = match self.lines.first() {
            Some(line) => Money::zero(line.item.total_cost.currency()),
            None => return Ok(Money::zero(Currency::default())),
        };
        for line in &self.lines {
            total = total.checked_add(&line.item.total_cost)?;
        }
        Ok(total)
    }

    /// Sum of line costs plus their computed taxes.
    pub fn gross_total(&self) -> DomainResult<Money> {
        let mut total = self.net_total()?;
        for line in &self.lines {
            total = total.checked_add(&line.tax.amount)?;
        }
        Ok(total)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.invoice_id
    }
}

/// Creates empty invoices bound to a client.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFactory;

impl InvoiceFactory {
    pub fn new() -> Self {
        Self
    }

    /// Produce an empty invoice for the client, with a fresh identifier.
    pub fn create(&self, client: ClientData) -> Invoice {
        Invoice {
            invoice_id: InvoiceId::new(),
            client,
            lines: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tallybook_catalog::{ProductData, ProductType};
    use tallybook_core::{ClientId, DomainError, ProductId};

    fn money(amount: &str, currency: Currency) -> Money {
        Money::new(amount.parse().unwrap(), currency)
    }

    fn line(total_cost: Money, tax_amount: Money) -> InvoiceLine {
        let product = ProductData::new(
            ProductId::new(),
            total_cost,
            "Widget",
            ProductType::Standard,
            Utc::now(),
        );
        InvoiceLine {
            item: RequestItem {
                product,
                quantity: 1,
                total_cost,
            },
            tax: Tax {
                amount: tax_amount,
                description: "23%".to_string(),
            },
        }
    }

    #[test]
    fn factory_creates_empty_invoice_bound_to_client() {
        let client = ClientData::new(ClientId::new(), "Client");
        let invoice = InvoiceFactory::new().create(client.clone());

        assert_eq!(invoice.client(), &client);
        assert!(invoice.lines().is_empty());
    }

    #[test]
    fn factory_assigns_fresh_identifiers() {
        let factory = InvoiceFactory::new();
        let client = ClientData::new(ClientId::new(), "Client");
        let first = factory.create(client.clone());
        let second = factory.create(client);
        assert_ne!(first.invoice_id(), second.invoice_id());
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let invoice = InvoiceFactory::new().create(ClientData::new(ClientId::new(), "Client"));
        assert!(invoice.net_total().unwrap().is_zero());
        assert!(invoice.gross_total().unwrap().is_zero());
    }

    #[test]
    fn totals_sum_costs_and_taxes() {
        let mut invoice =
            InvoiceFactory::new().create(ClientData::new(ClientId::new(), "Client"));
        invoice.add_line(line(
            money("100", Currency::Eur),
            money("23", Currency::Eur),
        ));
        invoice.add_line(line(money("50", Currency::Eur), money("4", Currency::Eur)));

        assert_eq!(invoice.net_total().unwrap(), money("150", Currency::Eur));
        assert_eq!(invoice.gross_total().unwrap(), money("177", Currency::Eur));
    }

    #[test]
    fn totals_reject_mixed_currencies() {
        let mut invoice =
            InvoiceFactory::new().create(ClientData::new(ClientId::new(), "Client"));
        invoice.add_line(line(
            money("100", Currency::Eur),
            money("23", Currency::Eur),
        ));
        invoice.add_line(line(money("50", Currency::Usd), money("4", Currency::Usd)));

        match invoice.net_total().unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("currency mismatch") => {}
            _ => panic!("Expected InvariantViolation for mixed currencies"),
        }
    }
}
