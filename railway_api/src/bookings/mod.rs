pub mod get_booking;
pub mod post_booking;
