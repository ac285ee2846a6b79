pub mod dictionary_showcase;
