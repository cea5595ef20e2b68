pub mod banner;
pub mod checkout;
pub mod cli;
pub mod config;
pub mod error;
pub mod refresh;
pub mod report;
pub mod scanner;
pub mod site;
