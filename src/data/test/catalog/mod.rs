use crate::data::catalog::CatalogRepository;
use entity::room::RoomState;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_category;
mod list_active_rooms_of_category;
mod list_categories;
