use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Passenger {
    pub name: String,
    pub gender: Gender,
    pub age: u8,
}

impl Passenger {
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::InvalidPassenger(String::from(
                "name is required",
            )));
        }

        if self.age == 0 {
            return Err(BookingError::InvalidPassenger(String::from(
                "age must be at least 1",
            )));
        }

        Ok(())
    }
}
