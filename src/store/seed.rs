use crate::models::{Availability, Game, Price, PricingTable};

const MILAN: (&str, &str, &str) = ("EA7 Emporio Armani Milan", "Unipol Forum", "Milan");
const MUNICH: (&str, &str, &str) = ("FC Bayern Munich", "SAP Garden", "Munich");

/// Games available when the service starts
pub fn seed_games() -> Vec<Game> {
    [
        (MILAN, "Real Madrid", "2025-12-15", "20:30", 450, Availability::High),
        (MUNICH, "Panathinaikos", "2025-12-18", "20:00", 420, Availability::High),
        (MILAN, "Fenerbahce", "2026-01-10", "20:45", 480, Availability::Medium),
        (MUNICH, "Olympiacos", "2026-01-22", "19:00", 440, Availability::Medium),
        (MILAN, "Barcelona", "2026-02-05", "20:30", 520, Availability::Low),
        (MUNICH, "Maccabi Tel Aviv", "2026-02-12", "20:00", 410, Availability::High),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, ((home_team, venue, city), away_team, date, time, from_chf, availability))| Game {
            id: (i + 1).to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            venue: venue.to_string(),
            city: city.to_string(),
            estimated_price: format!("From CHF {}", from_chf),
            availability,
        },
    )
    .collect()
}

/// Rate tables in effect until an admin replaces them
pub fn default_pricing() -> PricingTable {
    let mut pricing = PricingTable::default();

    pricing.room.insert("single".to_string(), Price(150.0));
    pricing.room.insert("double".to_string(), Price(100.0));

    pricing.transport.insert("economy".to_string(), Price(80.0));
    pricing.transport.insert("first".to_string(), Price(150.0));

    pricing.ticket.insert("standard".to_string(), Price(120.0));
    pricing.ticket.insert("premium".to_string(), Price(200.0));
    pricing.ticket.insert("vip".to_string(), Price(350.0));

    pricing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<String> = seed_games().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_third_game_is_fenerbahce() {
        let game = &seed_games()[2];
        assert_eq!(game.away_team, "Fenerbahce");
        assert_eq!(game.city, "Milan");
        assert_eq!(game.estimated_price, "From CHF 480");
        assert_eq!(game.availability, Availability::Medium);
    }

    #[test]
    fn test_default_pricing_is_valid() {
        let pricing = default_pricing();
        assert!(pricing.validate().is_ok());
        assert_eq!(pricing.ticket.get("vip"), Some(&Price(350.0)));
    }
}
