//! ISO 3166-2 subdivision codes.
//!
//! Only the US table is populated; the gateway mandates a state precisely
//! when the billing or shipping country is `US`, and forbids one otherwise.

/// A subdivision definition with its short code and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    /// Two-letter subdivision code (the part after `US-` in ISO 3166-2).
    pub code: &'static str,
    /// Subdivision name.
    pub name: &'static str,
}

/// US states, district and outlying territories, sorted by code.
pub const US_STATES: &[StateInfo] = &[
    StateInfo { code: "AK", name: "Alaska" },
    StateInfo { code: "AL", name: "Alabama" },
    StateInfo { code: "AR", name: "Arkansas" },
    StateInfo { code: "AS", name: "American Samoa" },
    StateInfo { code: "AZ", name: "Arizona" },
    StateInfo { code: "CA", name: "California" },
    StateInfo { code: "CO", name: "Colorado" },
    StateInfo { code: "CT", name: "Connecticut" },
    StateInfo { code: "DC", name: "District of Columbia" },
    StateInfo { code: "DE", name: "Delaware" },
    StateInfo { code: "FL", name: "Florida" },
    StateInfo { code: "GA", name: "Georgia" },
    StateInfo { code: "GU", name: "Guam" },
    StateInfo { code: "HI", name: "Hawaii" },
    StateInfo { code: "IA", name: "Iowa" },
    StateInfo { code: "ID", name: "Idaho" },
    StateInfo { code: "IL", name: "Illinois" },
    StateInfo { code: "IN", name: "Indiana" },
    StateInfo { code: "KS", name: "Kansas" },
    StateInfo { code: "KY", name: "Kentucky" },
    StateInfo { code: "LA", name: "Louisiana" },
    StateInfo { code: "MA", name: "Massachusetts" },
    StateInfo { code: "MD", name: "Maryland" },
    StateInfo { code: "ME", name: "Maine" },
    StateInfo { code: "MI", name: "Michigan" },
    StateInfo { code: "MN", name: "Minnesota" },
    StateInfo { code: "MO", name: "Missouri" },
    StateInfo { code: "MP", name: "Northern Mariana Islands" },
    StateInfo { code: "MS", name: "Mississippi" },
    StateInfo { code: "MT", name: "Montana" },
    StateInfo { code: "NC", name: "North Carolina" },
    StateInfo { code: "ND", name: "North Dakota" },
    StateInfo { code: "NE", name: "Nebraska" },
    StateInfo { code: "NH", name: "New Hampshire" },
    StateInfo { code: "NJ", name: "New Jersey" },
    StateInfo { code: "NM", name: "New Mexico" },
    StateInfo { code: "NV", name: "Nevada" },
    StateInfo { code: "NY", name: "New York" },
    StateInfo { code: "OH", name: "Ohio" },
    StateInfo { code: "OK", name: "Oklahoma" },
    StateInfo { code: "OR", name: "Oregon" },
    StateInfo { code: "PA", name: "Pennsylvania" },
    StateInfo { code: "PR", name: "Puerto Rico" },
    StateInfo { code: "RI", name: "Rhode Island" },
    StateInfo { code: "SC", name: "South Carolina" },
    StateInfo { code: "SD", name: "South Dakota" },
    StateInfo { code: "TN", name: "Tennessee" },
    StateInfo { code: "TX", name: "Texas" },
    StateInfo { code: "UM", name: "United States Minor Outlying Islands" },
    StateInfo { code: "UT", name: "Utah" },
    StateInfo { code: "VA", name: "Virginia" },
    StateInfo { code: "VI", name: "Virgin Islands" },
    StateInfo { code: "VT", name: "Vermont" },
    StateInfo { code: "WA", name: "Washington" },
    StateInfo { code: "WI", name: "Wisconsin" },
    StateInfo { code: "WV", name: "West Virginia" },
    StateInfo { code: "WY", name: "Wyoming" },
];

/// Returns `true` if `state` is a recognised subdivision of `country`.
///
/// Only `US` has subdivision data; any other country returns `false`.
#[must_use]
pub fn is_valid(country: &str, state: &str) -> bool {
    match country {
        "US" => US_STATES.binary_search_by(|info| info.code.cmp(&state)).is_ok(),
        _ => false,
    }
}
