pub mod dictionaries;
