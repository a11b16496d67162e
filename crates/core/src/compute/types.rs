use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{FieldValue, Fields, Resource};
use crate::serde::{deserialize_optional_string, deserialize_optional_timestamp};

/// One address of a server on a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub addr: String,
    #[serde(default = "default_ip_version")]
    pub version: u8,
}

fn default_ip_version() -> u8 {
    4
}

/// A compute server (instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Addresses keyed by network name.
    #[serde(default)]
    pub addresses: BTreeMap<String, Vec<Address>>,
}

impl Server {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: None,
            created: None,
            tenant_id: None,
            addresses: BTreeMap::new(),
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Adds an address on a network.
    pub fn with_address(mut self, network: impl Into<String>, addr: impl Into<String>) -> Self {
        self.addresses.entry(network.into()).or_default().push(Address {
            addr: addr.into(),
            version: 4,
        });
        self
    }

    /// Addresses rendered as `network=ip1, ip2`, one entry per network.
    pub fn networks(&self) -> Vec<String> {
        self.addresses
            .iter()
            .map(|(network, addresses)| {
                let ips: Vec<&str> = addresses.iter().map(|a| a.addr.as_str()).collect();
                format!("{}={}", network, ips.join(", "))
            })
            .collect()
    }
}

impl Resource for Server {
    const KIND: &'static str = "server";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Fields for Server {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "status", "created", "project_id", "networks"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "status" => FieldValue::text(self.status.as_deref()),
            "created" => self
                .created
                .map(|created| FieldValue::Text(created.to_rfc3339())),
            "project_id" => FieldValue::text(self.tenant_id.as_deref()),
            "networks" => Some(FieldValue::List(self.networks())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::format_networks;
    use crate::table::{project, Formatters};

    #[test]
    fn test_server_deserializes_nova_shape() {
        let server: Server = serde_json::from_str(
            r#"{
                "id": "9e5b8ad2-4d4b-4f4f-a4c5-1b0a3f3c6d11",
                "name": "web-01",
                "status": "ACTIVE",
                "created": "2013-05-22T14:08:39Z",
                "tenant_id": "8-9-64",
                "addresses": {
                    "private": [
                        {"addr": "10.0.0.3", "version": 4},
                        {"addr": "fd00::3", "version": 6}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(server.status.as_deref(), Some("ACTIVE"));
        assert!(server.created.is_some());
        assert_eq!(server.networks(), vec!["private=10.0.0.3, fd00::3"]);
    }

    #[test]
    fn test_networks_column_with_list_formatter() {
        let servers = vec![Server::new("s1", "web-01")
            .with_address("private", "10.0.0.3")
            .with_address("public", "172.24.4.10")];
        let mut formatters = Formatters::new();
        formatters.insert("Networks".to_string(), format_networks);

        let data: Vec<Vec<String>> = project(&servers, &["Name", "Networks"], &formatters)
            .rows
            .collect();

        assert_eq!(
            data[0],
            vec!["web-01", "private=10.0.0.3; public=172.24.4.10"]
        );
    }

    #[test]
    fn test_server_without_addresses() {
        let server = Server::new("s1", "web-01").with_status("BUILD");
        assert!(server.networks().is_empty());
        assert_eq!(server.field("created"), None);
    }
}
