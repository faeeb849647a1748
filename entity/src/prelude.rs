pub use super::admin::Entity as Admin;
pub use super::booking::Entity as Booking;
pub use super::customer::Entity as Customer;
pub use super::room::Entity as Room;
pub use super::room_category::Entity as RoomCategory;
