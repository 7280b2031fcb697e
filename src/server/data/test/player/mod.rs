use crate::server::{data::player::PlayerRepository, model::player::CreatePlayerParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod name_exists;
