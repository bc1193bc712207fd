pub mod test_derivation;
pub mod test_initialize_guards;
