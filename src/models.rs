//! Data models and DTOs (Data Transfer Objects) for the service.
//!
//! Contains structures for database entities and API request/response types.
//! All wire-facing types use camelCase field names to preserve the public
//! API contract.

use serde::{Deserialize, Serialize};

// ============================================================================
// Database Models
// ============================================================================

/// Represents a customer in the database
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique identifier
    pub id: i64,
    /// Customer display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Salted PBKDF2 hash of the customer's password
    pub password_hash: String,
    /// When the customer was created
    pub created_at: String,
}

/// Represents a TLS certificate in the database
///
/// The key and body are stored as opaque blobs; nothing here parses or
/// validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Unique identifier
    pub id: i64,
    /// Whether the certificate is active
    pub is_active: bool,
    /// Private key material (unique)
    pub private_key: String,
    /// Certificate body
    pub cert_body: String,
    /// Owning customer
    pub customer_id: i64,
    /// When the certificate was created
    pub created_at: String,
}

/// Represents a shortened URL in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surl {
    /// Unique identifier
    pub id: i64,
    /// The short code (unique, derived from the long URL)
    pub short_url: String,
    /// The original long URL
    pub long_url: String,
    /// When the surl was created
    pub created_at: String,
}

// ============================================================================
// API Request DTOs
// ============================================================================

/// Request body for creating a customer
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for creating a certificate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    pub customer_id: i64,
    pub is_active: bool,
    pub private_key: String,
    pub cert_body: String,
}

/// Request body for creating a surl
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurlRequest {
    pub long_url: String,
}

/// Request body for resolving a surl
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveSurlRequest {
    pub short_url: String,
}

// ============================================================================
// API Response DTOs
// ============================================================================

/// Customer representation returned by the API.
///
/// The stored password hash is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl CustomerResponse {
    /// Build the API representation from a database record
    pub fn from_customer(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            created_at: customer.created_at,
        }
    }
}

/// Time-windowed accession counts for a surl
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessionStats {
    /// Accessions since the surl was created
    pub all_time: i64,
    /// Accessions within the last 7x24 hours
    pub week: i64,
    /// Accessions within the last 24 hours
    pub day: i64,
}

/// Generic success message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Generic error response body: `{"error": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
