//! Crate-level test suites


mod boundary_tests;
