mod levels_tests;
mod reservoir_tests;
