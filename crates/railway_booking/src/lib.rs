pub mod booking;
pub mod error;
pub mod passenger;
pub mod payment;
pub mod timetable;
