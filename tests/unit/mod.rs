/// Unit test target covering the public API surface
mod basic_tests;
