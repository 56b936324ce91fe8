//! API Version Resolution
//!
//! Rentals can be versioned two independent ways:
//! - by URL prefix: the rental router is mounted once per version and each
//!   mount tags its requests with [`MountedVersion`]
//! - by vendor media type: `Accept: application/vnd.locatech.v2+json`
//!   (falling back to `Content-Type`), resolved by [`NegotiatedVersion`]
//!
//! An explicit vendor media type wins over the mount. Requests without one
//! get the version of the mount they arrived on.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::request::Parts;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::rental::RentalId;
use crate::shared::errors::ApiError;

static VENDOR_MEDIA_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^application/vnd\.locatech\.v(\d+)\+json$").expect("valid regex"));

/// A published version of the rentals contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }

    /// Vendor media type selecting this version
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::V1 => "application/vnd.locatech.v1+json",
            Self::V2 => "application/vnd.locatech.v2+json",
        }
    }

    /// Mount point of the rental router for this version
    #[must_use]
    pub const fn rentals_path(self) -> &'static str {
        match self {
            Self::V1 => "/alugueis",
            Self::V2 => "/v2/alugueis",
        }
    }

    /// Canonical location of a rental under this version
    #[must_use]
    pub fn rental_location(self, id: RentalId) -> String {
        format!("{}/{}", self.rentals_path(), id)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Result of scanning a header for a vendor media type
#[derive(Debug, PartialEq, Eq)]
pub enum MediaTypeVersion {
    Absent,
    Supported(ApiVersion),
    Unsupported(String),
}

/// Scan a comma-separated media type list for the first vendor media type.
///
/// Parameters such as `;q=0.8` are ignored; matching is case-insensitive.
#[must_use]
pub fn parse_media_types(value: &str) -> MediaTypeVersion {
    for candidate in value.split(',') {
        let essence = candidate.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if let Some(captures) = VENDOR_MEDIA_TYPE.captures(&essence) {
            return captures[1]
                .parse::<u32>()
                .ok()
                .and_then(ApiVersion::from_number)
                .map_or(MediaTypeVersion::Unsupported(essence.clone()), MediaTypeVersion::Supported);
        }
    }
    MediaTypeVersion::Absent
}

/// Version selected by the URL prefix the request arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedVersion(pub ApiVersion);

/// Version selected for this request after content negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiatedVersion(pub ApiVersion);

#[async_trait]
impl<S> FromRequestParts<S> for NegotiatedVersion
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        for header in [ACCEPT, CONTENT_TYPE] {
            let Some(value) = parts.headers.get(&header).and_then(|v| v.to_str().ok()) else {
                continue;
            };
            match parse_media_types(value) {
                MediaTypeVersion::Supported(version) => return Ok(Self(version)),
                MediaTypeVersion::Unsupported(media_type) => {
                    tracing::warn!(%media_type, "Unsupported API version requested");
                    return Err(ApiError::NotAcceptable(format!(
                        "Unsupported media type '{media_type}', expected one of {}, {}",
                        ApiVersion::V1.media_type(),
                        ApiVersion::V2.media_type()
                    )));
                }
                MediaTypeVersion::Absent => {}
            }
        }

        let mounted = parts
            .extensions
            .get::<MountedVersion>()
            .map_or(ApiVersion::V1, |mounted| mounted.0);
        Ok(Self(mounted))
    }
}
