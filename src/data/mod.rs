pub mod number_types;
