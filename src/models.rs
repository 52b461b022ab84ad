use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A hypermedia relation target as returned by the REST service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

/// Relation name → URL map (`_links` in the wire format).
///
/// The service never exposes stable numeric customer ids; update and delete
/// go to the entity's `self` link instead.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Links(pub HashMap<String, Link>);

impl Links {
    pub fn self_href(&self) -> Option<&str> {
        self.0
            .get("self")
            .map(|link| link.href.as_str())
            .filter(|href| !href.is_empty())
    }
}

/// Entity data plus the relation links it was fetched with.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomerFields {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub streetaddress: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
}

impl CustomerFields {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

pub type Customer = Linked<CustomerFields>;

/// A training session as served by the flattened `/gettrainings` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Training {
    pub id: u64,
    pub date: String,
    pub duration: i64,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub customer: Option<CustomerFields>,
}

impl Training {
    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .map(CustomerFields::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// User input for creating a training session.
#[derive(Debug, Clone)]
pub struct TrainingFields {
    pub date: chrono::DateTime<chrono::Local>,
    pub duration: i64,
    pub activity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_href_requires_non_empty_url() {
        let mut links = Links::default();
        assert_eq!(links.self_href(), None);
        links
            .0
            .insert("self".to_string(), Link { href: String::new() });
        assert_eq!(links.self_href(), None);
        links.0.insert(
            "self".to_string(),
            Link {
                href: "http://host/api/customers/1".to_string(),
            },
        );
        assert_eq!(links.self_href(), Some("http://host/api/customers/1"));
    }

    #[test]
    fn customer_deserializes_with_flattened_links() {
        let json = r#"{
            "firstname": "Jane",
            "lastname": "Doe",
            "email": "j@d.com",
            "phone": "123",
            "streetaddress": "1 St",
            "postcode": "00100",
            "city": "X",
            "_links": {
                "self": { "href": "http://host/api/customers/7" },
                "customer": { "href": "http://host/api/customers/7" }
            }
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.data.firstname, "Jane");
        assert_eq!(
            customer.links.self_href(),
            Some("http://host/api/customers/7")
        );
    }

    #[test]
    fn training_tolerates_missing_customer() {
        let json = r#"{"id": 3, "date": "2026-08-01T10:00:00.000+00:00", "duration": 60, "activity": "Yoga"}"#;
        let training: Training = serde_json::from_str(json).unwrap();
        assert_eq!(training.customer, None);
        assert_eq!(training.customer_name(), "unknown");
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let fields = CustomerFields {
            firstname: "Jane".to_string(),
            ..CustomerFields::default()
        };
        assert_eq!(fields.full_name(), "Jane");
    }
}
