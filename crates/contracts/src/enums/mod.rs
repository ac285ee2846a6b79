pub mod display_type;
