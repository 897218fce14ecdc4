pub mod seat;
pub mod user;

pub use seat::{Seat, SeatStatus};
pub use user::User;
