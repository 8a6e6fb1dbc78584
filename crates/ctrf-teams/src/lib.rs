pub mod cli;
pub mod ctrf;
pub mod formatter;
pub mod notify;
pub mod reporter;
