pub mod api_utils;
pub mod dict;
pub mod icons;
pub mod state;
