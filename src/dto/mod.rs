pub mod phones;
