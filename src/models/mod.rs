pub mod booking;
pub mod game;
pub mod pricing;

pub use booking::{Booking, BookingReceipt, BookingStatus};
pub use game::{Availability, Game, GameUpdate, NewGame};
pub use pricing::{Price, PriceCategory, PriceQuote, PricingTable, QuoteRequest, TierPrices};
