use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub uid: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub nickname: String,
    /// Argon2 PHC string
    pub password: String,
    pub score: i32,
    /// -1 banned, 0 normal, 1 admin, 2 super admin
    pub permission: i32,
    /// Address the account was registered from
    pub ip: String,
    pub last_sign_at: DateTimeUtc,
    pub register_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
