//! Persistence services and request validation. Every service takes the pool explicitly.

mod activities;
mod campers;
mod signups;
mod validation;
pub use activities::ActivityService;
pub use campers::CamperService;
pub use signups::SignupService;
pub use validation::{CamperField, CamperUpdate, RequestValidator};
pub use validation::{AGE_MESSAGE, INVALID_ATTRIBUTE_MESSAGE, NO_DATA_MESSAGE, TIME_MESSAGE};
