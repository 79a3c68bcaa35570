pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod corpus;
pub mod logging;
pub mod report;
