use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the `/activities` collection, keyed by activity name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Signed so an over-full snapshot shows a negative count instead of wrapping.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Server order is kept, so cards render in the order the backend lists them.
pub type ActivityMap = IndexMap<String, ActivityDetails>;

/// A participant row and the data its removal control carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

pub fn build_cards(activities: &ActivityMap) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|(name, details)| ActivityCard {
            name: name.clone(),
            description: details.description.clone(),
            schedule: details.schedule.clone(),
            spots_left: details.spots_left(),
            participants: details
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    activity: name.clone(),
                    email: email.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Options for the activity select, in card order.
pub fn activity_names(activities: &ActivityMap) -> Vec<String> {
    activities.keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActivityMap {
        serde_json::from_str(
            r#"{
                "Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]},
                "Art Studio": {"description":"paint","schedule":"Wed","max_participants":3,"participants":["b@x.com","c@x.com","d@x.com"]},
                "Drama": {"description":"stage","schedule":"Fri","max_participants":5,"participants":[]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn chess_club_has_one_spot_and_one_removal_control() {
        let cards = build_cards(&sample());
        let chess = &cards[0];
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.availability_text(), "1 spots left");
        assert_eq!(
            chess.participants,
            vec![ParticipantRow {
                activity: "Chess Club".into(),
                email: "a@x.com".into()
            }]
        );
    }

    #[test]
    fn removal_controls_match_total_participants() {
        let activities = sample();
        let cards = build_cards(&activities);
        let controls: usize = cards.iter().map(|card| card.participants.len()).sum();
        let participants: usize = activities.values().map(|a| a.participants.len()).sum();
        assert_eq!(controls, participants);
        for (card, details) in cards.iter().zip(activities.values()) {
            assert_eq!(
                card.spots_left,
                details.max_participants as i64 - details.participants.len() as i64
            );
        }
    }

    #[test]
    fn keeps_server_order() {
        assert_eq!(
            activity_names(&sample()),
            vec!["Chess Club", "Art Studio", "Drama"]
        );
    }

    #[test]
    fn overfull_activity_goes_negative() {
        let details = ActivityDetails {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(details.spots_left(), -1);
    }

    #[test]
    fn missing_participants_default_to_empty() {
        let details: ActivityDetails = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":4}"#,
        )
        .unwrap();
        assert!(details.participants.is_empty());
        assert_eq!(details.spots_left(), 4);
    }
}
