use jiff::civil::{Time, time};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Id of the train offered when no scheduled service covers a city pair.
pub const GENERIC_TRAIN_ID: u32 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Train {
    pub id: u32,
    pub name: String,
    pub source: String,
    pub destination: String,
    #[schemars(with = "String")]
    pub departure: Time,
    pub station: String,
}

impl Train {
    fn scheduled(
        id: u32,
        name: &str,
        (source, destination): (&str, &str),
        departure: Time,
        station: &str,
    ) -> Self {
        Train {
            id,
            name: name.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            departure,
            station: station.to_string(),
        }
    }

    fn generic(source: &str, destination: &str) -> Self {
        Train {
            id: GENERIC_TRAIN_ID,
            name: String::from("Generic Express"),
            source: source.to_string(),
            destination: destination.to_string(),
            departure: time(9, 0, 0, 0),
            station: format!("{source} Main Station"),
        }
    }

    fn serves(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }
}

/// Scheduled trains. Any city pair without a scheduled train is served by a
/// generic express.
#[derive(Debug, Clone)]
pub struct Timetable {
    trains: Vec<Train>,
}

impl Timetable {
    pub fn new(trains: Vec<Train>) -> Self {
        Timetable { trains }
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn trains_between(&self, source: &str, destination: &str) -> Vec<Train> {
        let trains: Vec<Train> = self
            .trains
            .iter()
            .filter(|train| train.serves(source, destination))
            .cloned()
            .collect();

        if trains.is_empty() {
            return vec![Train::generic(source, destination)];
        }

        trains
    }

    pub fn find(&self, id: u32, source: &str, destination: &str) -> Option<Train> {
        self.trains_between(source, destination)
            .into_iter()
            .find(|train| train.id == id)
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Timetable::new(vec![
            Train::scheduled(
                1,
                "Rajdhani Express",
                ("Mumbai", "Delhi"),
                time(10, 0, 0, 0),
                "Mumbai Central",
            ),
            Train::scheduled(
                2,
                "Satabdi Express",
                ("Chennai", "Bangalore"),
                time(17, 0, 0, 0),
                "Chennai Central",
            ),
            Train::scheduled(
                3,
                "Humsafar Express",
                ("Delhi", "Jaipur"),
                time(23, 0, 0, 0),
                "Delhi Junction",
            ),
            Train::scheduled(
                4,
                "Garib-Rath Express",
                ("Hyderabad", "Bangalore"),
                time(7, 0, 0, 0),
                "Hyderabad Deccan",
            ),
            Train::scheduled(
                5,
                "Duronto Express",
                ("Mumbai", "Ahmedabad"),
                time(6, 0, 0, 0),
                "Mumbai Central",
            ),
            Train::scheduled(
                6,
                "Double Decker",
                ("Jaipur", "Delhi"),
                time(9, 0, 0, 0),
                "Jaipur Junction",
            ),
            Train::scheduled(
                7,
                "Shatabdi Express",
                ("Delhi", "Shimla"),
                time(8, 0, 0, 0),
                "Delhi Junction",
            ),
            Train::scheduled(
                8,
                "Intercity Express",
                ("Bangalore", "Chennai"),
                time(15, 0, 0, 0),
                "Bangalore City",
            ),
            Train::scheduled(
                9,
                "Jan Shatabdi",
                ("Ahmedabad", "Mumbai"),
                time(14, 0, 0, 0),
                "Ahmedabad Junction",
            ),
            Train::scheduled(
                10,
                "Himalayan Queen",
                ("Delhi", "Shimla"),
                time(6, 0, 0, 0),
                "Delhi Junction",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trains_between_scheduled_pair() {
        let timetable = Timetable::default();
        let trains = timetable.trains_between("Delhi", "Shimla");

        let names: Vec<&str> = trains.iter().map(|train| train.name.as_str()).collect();
        assert_eq!(names, vec!["Shatabdi Express", "Himalayan Queen"]);
    }

    #[test]
    fn test_trains_between_is_directional() {
        let timetable = Timetable::default();
        let trains = timetable.trains_between("Shimla", "Delhi");

        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].id, GENERIC_TRAIN_ID);
    }

    #[test]
    fn test_generic_fallback() {
        let timetable = Timetable::default();
        let trains = timetable.trains_between("Chennai", "Shimla");

        assert_eq!(
            trains,
            vec![Train {
                id: GENERIC_TRAIN_ID,
                name: String::from("Generic Express"),
                source: String::from("Chennai"),
                destination: String::from("Shimla"),
                departure: time(9, 0, 0, 0),
                station: String::from("Chennai Main Station"),
            }]
        );
    }

    #[test]
    fn test_find() {
        let timetable = Timetable::default();

        assert_eq!(
            timetable
                .find(1, "Mumbai", "Delhi")
                .map(|train| train.station),
            Some(String::from("Mumbai Central"))
        );
        assert_eq!(timetable.find(1, "Delhi", "Mumbai"), None);
        assert_eq!(timetable.find(GENERIC_TRAIN_ID, "Mumbai", "Delhi"), None);
        assert!(timetable.find(GENERIC_TRAIN_ID, "Delhi", "Mumbai").is_some());
    }

    #[test]
    fn test_departure_serializes_as_clock_time() {
        let timetable = Timetable::default();
        let value = serde_json::to_value(&timetable.trains()[0]).unwrap();

        assert_eq!(value["departure"], serde_json::json!("10:00:00"));
    }
}
