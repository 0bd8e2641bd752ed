//! 3-D Secure result parsed from a transaction response.

use serde_json::{Map, Value};

use crate::extract;

/// The known 3-D Secure outcome codes.
///
/// The gateway is the authority on which statuses it returns, so
/// [`Secure3D`] stores the raw string without rejecting unknown codes; this
/// enum exists for callers that want to normalise or match on the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secure3DStatus {
    /// The cardholder authenticated successfully.
    Authenticated,
    /// Authentication was forced by merchant settings.
    Force,
    /// The card was not checked.
    NotChecked,
    /// The cardholder failed authentication.
    NotAuthenticated,
    /// The authentication attempt errored.
    Error,
    /// The card is not enrolled in 3-D Secure.
    CardNotEnrolled,
    /// The issuer is not enrolled in 3-D Secure.
    IssuerNotEnrolled,
}

impl Secure3DStatus {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "Authenticated",
            Self::Force => "Force",
            Self::NotChecked => "NotChecked",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::Error => "Error",
            Self::CardNotEnrolled => "CardNotEnrolled",
            Self::IssuerNotEnrolled => "IssuerNotEnrolled",
        }
    }

    /// Matches a raw status string against the known codes,
    /// case-insensitively. Returns `None` for anything else.
    #[must_use]
    pub fn parse(status: &str) -> Option<Self> {
        const KNOWN: &[Secure3DStatus] = &[
            Secure3DStatus::Authenticated,
            Secure3DStatus::Force,
            Secure3DStatus::NotChecked,
            Secure3DStatus::NotAuthenticated,
            Secure3DStatus::Error,
            Secure3DStatus::CardNotEnrolled,
            Secure3DStatus::IssuerNotEnrolled,
        ];
        KNOWN
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(status))
            .copied()
    }
}

/// The 3-D Secure block of a transaction response.
///
/// Holds the raw outcome status plus the optional ACS redirect parameters
/// (`acsUrl` and `paReq`) needed to send the cardholder to their issuer's
/// challenge page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secure3D {
    status: Option<String>,
    acs_url: Option<String>,
    pa_req: Option<String>,
}

impl Secure3D {
    /// Creates a 3-D Secure result from its raw parts.
    #[must_use]
    pub const fn new(
        status: Option<String>,
        acs_url: Option<String>,
        pa_req: Option<String>,
    ) -> Self {
        Self {
            status,
            acs_url,
            pa_req,
        }
    }

    /// Creates a 3-D Secure result from decoded response data.
    ///
    /// Reads `3DSecure.status`, falling back to the top-level `status` path
    /// when no 3-D Secure block is present, plus `acsUrl` and `paReq`.
    ///
    /// Note the fallback conflates two distinct statuses: when the gateway
    /// returns no 3-D Secure block at all, the overall transaction status
    /// leaks into this field. That matches the gateway contract; callers
    /// that need to tell the cases apart can check
    /// [`Secure3D::canonical_status`] for `None`.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        let status =
            extract::get_str(data, "3DSecure.status").or_else(|| extract::get_str(data, "status"));
        Self::new(
            status.map(str::to_owned),
            extract::get_str(data, "acsUrl").map(str::to_owned),
            extract::get_str(data, "paReq").map(str::to_owned),
        )
    }

    /// Returns the raw status string, exactly as the gateway sent it.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the status normalised to a known 3-D Secure code, or `None`
    /// if the raw status is absent or not a 3-D Secure outcome.
    #[must_use]
    pub fn canonical_status(&self) -> Option<Secure3DStatus> {
        self.status.as_deref().and_then(Secure3DStatus::parse)
    }

    /// Returns the ACS URL to send the cardholder to, if any.
    #[must_use]
    pub fn acs_url(&self) -> Option<&str> {
        self.acs_url.as_deref()
    }

    /// Returns the PA request token to post to the ACS URL, if any.
    #[must_use]
    pub fn pa_req(&self) -> Option<&str> {
        self.pa_req.as_deref()
    }

    /// Returns the field set for the POST to the ACS URL.
    ///
    /// `paReq` carries the stored token (null when absent) and `md` is
    /// always present and currently always empty, pending gateway support.
    /// `TermUrl` — the return URL after the challenge — is included only
    /// when supplied. Side-effect-free; may be called repeatedly.
    #[must_use]
    pub fn pa_request_fields(&self, term_url: Option<&str>) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "paReq".to_owned(),
            self.pa_req.clone().map_or(Value::Null, Value::String),
        );
        fields.insert("md".to_owned(), Value::String(String::new()));
        if let Some(term_url) = term_url {
            fields.insert("TermUrl".to_owned(), term_url.to_owned().into());
        }
        fields
    }
}
