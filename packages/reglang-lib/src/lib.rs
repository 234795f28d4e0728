pub mod automaton;
pub mod config;
pub mod error;
pub mod expr;
pub mod logger;
pub mod validation;
