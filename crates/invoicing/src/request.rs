use serde::{Deserialize, Serialize};

use tallybook_catalog::ProductData;
use tallybook_core::{Money, ValueObject};
use tallybook_parties::ClientData;

/// One line of a not-yet-processed invoicing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub product: ProductData,
    pub quantity: u32,
    pub total_cost: Money,
}

impl ValueObject for RequestItem {}

/// A client's request to be invoiced for a list of items.
///
/// Items keep insertion order; that order drives the order of tax-policy
/// calls and of the resulting invoice lines. `add` performs no validation —
/// duplicates and zero-quantity items pass through untouched, the request
/// records what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    /// Append an item to the request.
    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    /// Decompose the request for processing.
    pub fn into_parts(self) -> (ClientData, Vec<RequestItem>) {
        (self.client, self.items)
    }
}
