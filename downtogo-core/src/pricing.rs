//! Ticket price comparison across providers by seating section.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingSection {
    pub id: String,
    pub name: String,
}

/// A third-party ticket seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketProvider {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPrice {
    pub price: Decimal,
    pub fees: Decimal,
    pub total: Decimal,
    /// Where the ticket can be bought
    pub url: String,
}

impl TicketPrice {
    /// Whether the listed total is the price plus fees.
    pub fn is_consistent(&self) -> bool {
        self.price + self.fees == self.total
    }
}

/// Prices keyed by section id, then provider id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(BTreeMap<String, BTreeMap<String, TicketPrice>>);

impl PriceTable {
    pub fn get(&self, section_id: &str, provider_id: &str) -> Option<&TicketPrice> {
        self.0.get(section_id)?.get(provider_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, TicketPrice>)> {
        self.0.iter()
    }
}

/// One provider's price for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer<'a> {
    pub provider: &'a TicketProvider,
    pub price: &'a TicketPrice,
}

impl Catalog {
    /// Every provider's price for `section_id`, in provider order. Providers
    /// without a price for the section are left out.
    pub fn offers(&self, section_id: &str) -> Vec<Offer<'_>> {
        self.providers()
            .iter()
            .filter_map(|provider| {
                self.prices()
                    .get(section_id, &provider.id)
                    .map(|price| Offer { provider, price })
            })
            .collect()
    }

    /// The offer with the lowest total. Ties go to the earlier provider.
    pub fn cheapest(&self, section_id: &str) -> Option<Offer<'_>> {
        self.offers(section_id)
            .into_iter()
            .reduce(|best, offer| {
                if offer.price.total < best.price.total {
                    offer
                } else {
                    best
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
[[sections]]
id = "floor"
name = "Floor"

[[sections]]
id = "s101"
name = "Section 101"

[[sections]]
id = "s201"
name = "Section 201"

[[providers]]
id = "ticketmaster"
name = "Ticketmaster"

[[providers]]
id = "stubhub"
name = "StubHub"

[[providers]]
id = "seatgeek"
name = "SeatGeek"

[prices.floor.ticketmaster]
price = "250.00"
fees = "45.50"
total = "295.50"
url = "https://www.ticketmaster.com"

[prices.floor.seatgeek]
price = "240.00"
fees = "40.00"
total = "280.00"
url = "https://seatgeek.com"

[prices.s101.ticketmaster]
price = "100.00"
fees = "20.00"
total = "120.00"
url = "https://www.ticketmaster.com"

[prices.s101.stubhub]
price = "95.00"
fees = "25.00"
total = "120.00"
url = "https://www.stubhub.com"
"#,
        )
        .unwrap()
    }

    #[test]
    fn offers_follow_provider_order_and_skip_missing() {
        let catalog = catalog();
        let offers = catalog.offers("floor");

        let providers: Vec<&str> = offers.iter().map(|o| o.provider.id.as_str()).collect();
        assert_eq!(providers, vec!["ticketmaster", "seatgeek"]);
        assert_eq!(offers[1].price.total, dec("280.00"));
    }

    #[test]
    fn cheapest_picks_lowest_total() {
        let catalog = catalog();
        let cheapest = catalog.cheapest("floor").unwrap();

        assert_eq!(cheapest.provider.name, "SeatGeek");
        assert_eq!(cheapest.price.url, "https://seatgeek.com");
    }

    #[test]
    fn cheapest_tie_goes_to_earlier_provider() {
        let catalog = catalog();
        assert_eq!(catalog.cheapest("s101").unwrap().provider.id, "ticketmaster");
    }

    #[test]
    fn sections_without_prices_have_no_offers() {
        let catalog = catalog();

        assert!(catalog.offers("s201").is_empty());
        assert!(catalog.cheapest("s201").is_none());
        assert!(catalog.offers("no-such-section").is_empty());
    }

    #[test]
    fn totals_add_up() {
        let catalog = catalog();
        let price = catalog.prices().get("floor", "ticketmaster").unwrap();
        assert!(price.is_consistent());

        let off = TicketPrice {
            total: dec("1.00"),
            ..price.clone()
        };
        assert!(!off.is_consistent());
    }
}
