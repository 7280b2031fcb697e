pub use super::option::Entity as SiteOption;
pub use super::player::Entity as Player;
pub use super::user::Entity as User;
