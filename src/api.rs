use chrono::{SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::models::{Customer, CustomerFields, Links, Training, TrainingFields};

pub const RESET_CONFIRMATION: &str = "DB reset done";

#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server answered with a non-success status.
    RequestFailed(u16),
    /// The request never completed, or the response body failed to parse.
    Network(String),
    /// A mutation was attempted on an entity without a usable self link.
    MissingSelfLink,
    /// The reset endpoint answered with something other than its sentinel
    /// body; carries the raw server text verbatim.
    ResetRejected(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::RequestFailed(status) => format!("Server returned status {status}"),
            ApiError::Network(message) => message.clone(),
            ApiError::MissingSelfLink => "Entity is missing its self link".to_string(),
            ApiError::ResetRejected(body) => {
                if body.is_empty() {
                    "Reset failed: empty server response".to_string()
                } else {
                    format!("Reset failed: {body}")
                }
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CustomerCollection {
    #[serde(rename = "_embedded", default)]
    embedded: Option<EmbeddedCustomers>,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedCustomers {
    #[serde(default)]
    customers: Vec<Customer>,
}

/// Pulls the customer list out of the hypermedia envelope. A missing
/// `_embedded` or `customers` key means an empty database, not an error.
pub fn parse_customer_collection(body: &str) -> Result<Vec<Customer>, ApiError> {
    let collection: CustomerCollection =
        serde_json::from_str(body).map_err(|err| ApiError::Network(err.to_string()))?;
    Ok(collection
        .embedded
        .map(|embedded| embedded.customers)
        .unwrap_or_default())
}

pub fn is_reset_confirmation(body: &str) -> bool {
    body == RESET_CONFIRMATION
}

/// Creation payload for `POST /trainings`: the customer rides along as its
/// self-link URL, not an embedded object.
pub fn training_payload(fields: &TrainingFields, customer_links: &Links) -> Result<serde_json::Value, ApiError> {
    let href = customer_links.self_href().ok_or(ApiError::MissingSelfLink)?;
    Ok(json!({
        "date": fields
            .date
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        "duration": fields.duration,
        "activity": fields.activity,
        "customer": href,
    }))
}

#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent("trainerdesk")
            .build()
            .expect("Failed to build HTTP client");
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let body = self.get_text(format!("{}/customers", self.base_url))?;
        parse_customer_collection(&body)
    }

    pub fn create_customer(&self, fields: &CustomerFields) -> Result<Customer, ApiError> {
        let response = self
            .client
            .post(format!("{}/customers", self.base_url))
            .json(fields)
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    pub fn update_customer(
        &self,
        fields: &CustomerFields,
        links: &Links,
    ) -> Result<Customer, ApiError> {
        let href = links.self_href().ok_or(ApiError::MissingSelfLink)?;
        let response = self
            .client
            .put(href)
            .json(fields)
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    pub fn delete_customer(&self, links: &Links) -> Result<(), ApiError> {
        let href = links.self_href().ok_or(ApiError::MissingSelfLink)?;
        let response = self
            .client
            .delete(href)
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)?;
        Ok(())
    }

    pub fn list_trainings(&self) -> Result<Vec<Training>, ApiError> {
        let response = self
            .client
            .get(format!("{}/gettrainings", self.base_url))
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    pub fn create_training(
        &self,
        fields: &TrainingFields,
        customer_links: &Links,
    ) -> Result<Training, ApiError> {
        let payload = training_payload(fields, customer_links)?;
        let response = self
            .client
            .post(format!("{}/trainings", self.base_url))
            .json(&payload)
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    pub fn delete_training(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/trainings/{}", self.base_url, id))
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)?;
        Ok(())
    }

    /// Destructive demo-reset. Succeeds only on the exact sentinel body;
    /// everything else comes back verbatim as `ResetRejected`.
    pub fn reset_database(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/reset", self.base_url))
            .header("Accept", "text/plain")
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let body = response
            .text()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if is_reset_confirmation(&body) {
            Ok(())
        } else {
            Err(ApiError::ResetRejected(body))
        }
    }

    fn get_text(&self, url: String) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)?;
        response
            .text()
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

fn check_status(response: &reqwest::blocking::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::RequestFailed(status.as_u16()))
    }
}

fn read_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ApiError> {
    check_status(&response)?;
    response
        .json::<T>()
        .map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::Link;

    #[test]
    fn parses_embedded_customers() {
        let body = r#"{
            "_embedded": {
                "customers": [
                    {
                        "firstname": "Jane",
                        "lastname": "Doe",
                        "email": "j@d.com",
                        "phone": "123",
                        "streetaddress": "1 St",
                        "postcode": "00100",
                        "city": "X",
                        "_links": { "self": { "href": "http://host/api/customers/1" } }
                    }
                ]
            }
        }"#;
        let customers = parse_customer_collection(body).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].data.lastname, "Doe");
        assert!(customers[0].links.self_href().is_some());
    }

    #[test]
    fn missing_embedded_means_empty_list() {
        let customers = parse_customer_collection("{}").unwrap();
        assert!(customers.is_empty());
    }

    #[test]
    fn missing_customers_key_means_empty_list() {
        let customers = parse_customer_collection(r#"{"_embedded": {}}"#).unwrap();
        assert!(customers.is_empty());
    }

    #[test]
    fn malformed_body_is_a_network_error() {
        assert!(matches!(
            parse_customer_collection("not json"),
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn reset_confirmation_is_exact() {
        assert!(is_reset_confirmation("DB reset done"));
        assert!(!is_reset_confirmation(""));
        assert!(!is_reset_confirmation("DB reset done\n"));
        assert!(!is_reset_confirmation("db reset done"));
    }

    #[test]
    fn training_payload_uses_customer_self_link() {
        let mut links = Links::default();
        links.0.insert(
            "self".to_string(),
            Link {
                href: "http://host/api/customers/4".to_string(),
            },
        );
        let fields = TrainingFields {
            date: chrono::Local.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap(),
            duration: 45,
            activity: "Spinning".to_string(),
        };
        let payload = training_payload(&fields, &links).unwrap();
        assert_eq!(payload["customer"], "http://host/api/customers/4");
        assert_eq!(payload["duration"], 45);
        assert_eq!(payload["activity"], "Spinning");
        let date = payload["date"].as_str().unwrap();
        assert!(date.ends_with('Z'), "expected UTC timestamp, got {date}");
    }

    #[test]
    fn training_payload_requires_self_link() {
        let fields = TrainingFields {
            date: chrono::Local::now(),
            duration: 30,
            activity: "Run".to_string(),
        };
        assert!(matches!(
            training_payload(&fields, &Links::default()),
            Err(ApiError::MissingSelfLink)
        ));
    }
}
