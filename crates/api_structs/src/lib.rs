mod lookup;
mod project;
mod reminder;
mod shared;
mod status;
mod task;
mod user;

pub mod dtos {
    pub use crate::project::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::task::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::lookup::api::*;
pub use crate::project::api::*;
pub use crate::reminder::api::*;
pub use crate::shared::*;
pub use crate::status::api::*;
pub use crate::task::api::*;
pub use crate::user::api::*;
