use serde::{Deserialize, Serialize};

use tallybook_core::{ClientId, ValueObject};

/// Published-language snapshot of a client.
///
/// Carries just enough to identify and display the client on documents
/// (invoices, orders). The client master data lives outside this domain;
/// this value is created by the caller and owned by whatever document
/// references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    client_id: ClientId,
    name: String,
}

impl ClientData {
    pub fn new(client_id: ClientId, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ClientData {}
