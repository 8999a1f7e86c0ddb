use serde::{Deserialize, Serialize};

/// A game offered as part of a travel package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Server-assigned identifier (stringified sequence number)
    pub id: String,

    /// Home team name
    pub home_team: String,

    /// Away team name
    pub away_team: String,

    /// Game date (e.g., "2025-12-15")
    pub date: String,

    /// Tip-off time (e.g., "20:30")
    pub time: String,

    /// Arena name
    pub venue: String,

    /// Host city
    pub city: String,

    /// Price shown in the catalog (e.g., "From CHF 450")
    pub estimated_price: String,

    /// Advisory availability label
    pub availability: Availability,
}

/// Advisory availability tier. Not tied to any inventory count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    High,
    Medium,
    Low,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::High => "high",
            Availability::Medium => "medium",
            Availability::Low => "low",
        }
    }
}

/// Payload for adding a game. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub city: String,
    pub estimated_price: String,
    pub availability: Availability,
}

impl NewGame {
    /// Attach a server-assigned id
    pub fn into_game(self, id: String) -> Game {
        Game {
            id,
            home_team: self.home_team,
            away_team: self.away_team,
            date: self.date,
            time: self.time,
            venue: self.venue,
            city: self.city,
            estimated_price: self.estimated_price,
            availability: self.availability,
        }
    }
}

/// Partial update for a game. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub estimated_price: Option<String>,
    pub availability: Option<Availability>,
}

impl GameUpdate {
    /// Overwrite the fields present in this update
    pub fn apply(self, game: &mut Game) {
        if let Some(home_team) = self.home_team {
            game.home_team = home_team;
        }
        if let Some(away_team) = self.away_team {
            game.away_team = away_team;
        }
        if let Some(date) = self.date {
            game.date = date;
        }
        if let Some(time) = self.time {
            game.time = time;
        }
        if let Some(venue) = self.venue {
            game.venue = venue;
        }
        if let Some(city) = self.city {
            game.city = city;
        }
        if let Some(estimated_price) = self.estimated_price {
            game.estimated_price = estimated_price;
        }
        if let Some(availability) = self.availability {
            game.availability = availability;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game {
            id: "1".to_string(),
            home_team: "EA7 Emporio Armani Milan".to_string(),
            away_team: "Real Madrid".to_string(),
            date: "2025-12-15".to_string(),
            time: "20:30".to_string(),
            venue: "Unipol Forum".to_string(),
            city: "Milan".to_string(),
            estimated_price: "From CHF 450".to_string(),
            availability: Availability::High,
        }
    }

    #[test]
    fn test_game_serializes_camel_case() {
        let value = serde_json::to_value(sample_game()).unwrap();
        assert_eq!(value["homeTeam"], "EA7 Emporio Armani Milan");
        assert_eq!(value["estimatedPrice"], "From CHF 450");
        assert_eq!(value["availability"], "high");
        assert!(value.get("home_team").is_none());
    }

    #[test]
    fn test_new_game_ignores_client_id() {
        let json = serde_json::json!({
            "id": "42",
            "homeTeam": "FC Bayern Munich",
            "awayTeam": "Partizan",
            "date": "2026-03-01",
            "time": "18:00",
            "venue": "SAP Garden",
            "city": "Munich",
            "estimatedPrice": "From CHF 400",
            "availability": "low"
        });
        let new_game: NewGame = serde_json::from_value(json).unwrap();
        let game = new_game.into_game("7".to_string());
        assert_eq!(game.id, "7");
        assert_eq!(game.availability, Availability::Low);
    }

    #[test]
    fn test_update_preserves_absent_fields() {
        let mut game = sample_game();
        let update: GameUpdate =
            serde_json::from_value(serde_json::json!({ "availability": "low", "time": "21:00" }))
                .unwrap();
        update.apply(&mut game);

        assert_eq!(game.availability, Availability::Low);
        assert_eq!(game.time, "21:00");
        assert_eq!(game.home_team, "EA7 Emporio Armani Milan");
        assert_eq!(game.venue, "Unipol Forum");
        assert_eq!(game.id, "1");
    }

    #[test]
    fn test_unknown_availability_rejected() {
        let result: Result<GameUpdate, _> =
            serde_json::from_value(serde_json::json!({ "availability": "sold_out" }));
        assert!(result.is_err());
    }
}
