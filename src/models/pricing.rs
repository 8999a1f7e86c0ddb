use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every whole f64 is exactly representable
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Amount in CHF. Fractional amounts are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Price(pub f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Price {
    // Whole amounts are written as integers (150, not 150.0)
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_WHOLE {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Unit prices per tier name
pub type TierPrices = BTreeMap<String, Price>;

/// Rate tables used to price a travel package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingTable {
    /// Price per person per room type
    #[serde(default)]
    pub room: TierPrices,

    /// Price per person per transport class
    #[serde(default)]
    pub transport: TierPrices,

    /// Price per person per seat level
    #[serde(default)]
    pub ticket: TierPrices,
}

/// Pricing category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    Room,
    Transport,
    Ticket,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 3] = [
        PriceCategory::Room,
        PriceCategory::Transport,
        PriceCategory::Ticket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Room => "room",
            PriceCategory::Transport => "transport",
            PriceCategory::Ticket => "ticket",
        }
    }
}

impl PricingTable {
    pub fn tiers(&self, category: PriceCategory) -> &TierPrices {
        match category {
            PriceCategory::Room => &self.room,
            PriceCategory::Transport => &self.transport,
            PriceCategory::Ticket => &self.ticket,
        }
    }

    /// Unit price for a tier. Unknown or missing tiers price at 0.
    pub fn unit_price(&self, category: PriceCategory, tier: Option<&str>) -> Price {
        tier.and_then(|name| self.tiers(category).get(name))
            .copied()
            .unwrap_or(Price::ZERO)
    }

    /// Check the table before it replaces the live one
    pub fn validate(&self) -> Result<(), String> {
        for category in PriceCategory::ALL {
            for (name, price) in self.tiers(category) {
                if name.trim().is_empty() {
                    return Err(format!(
                        "pricing category '{}' contains a blank tier name",
                        category.as_str()
                    ));
                }
                if !price.0.is_finite() || price.0 < 0.0 {
                    return Err(format!(
                        "price for {}.{} must be a non-negative number",
                        category.as_str(),
                        name
                    ));
                }
            }
        }
        Ok(())
    }

    /// Price a package for the given selections
    pub fn quote(&self, request: &QuoteRequest) -> PriceQuote {
        let room = self.unit_price(PriceCategory::Room, request.room_type.as_deref());
        let transport = self.unit_price(
            PriceCategory::Transport,
            request.transport_class.as_deref(),
        );
        let ticket = self.unit_price(PriceCategory::Ticket, request.seat_level.as_deref());

        let per_person = room.0 + transport.0 + ticket.0;
        let total = Price(per_person * f64::from(request.guests));

        PriceQuote {
            room,
            transport,
            ticket,
            total,
        }
    }
}

/// Selections submitted to the price calculator
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub room_type: Option<String>,
    pub transport_class: Option<String>,
    pub seat_level: Option<String>,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

fn default_guests() -> u32 {
    1
}

/// Per-person unit prices and the package total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub room: Price,
    pub transport: Price,
    pub ticket: Price,
    pub total: Price,
}
