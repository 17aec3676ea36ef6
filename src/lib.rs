pub mod uid;
pub mod component;
pub mod html;
pub mod controls;
pub mod template;
pub mod templates {
    pub mod flat;
    pub mod card;
    pub mod sidebar;
}
pub mod binding;

pub use uid::{build_id, reset_uid_random_seed};
