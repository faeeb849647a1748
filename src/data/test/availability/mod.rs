use crate::data::availability::AvailabilityResolver;
use chrono::NaiveDate;
use entity::booking::BookingStatus;
use entity::room::RoomState;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_free_room;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
