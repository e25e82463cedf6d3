pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod intake;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod session;
pub mod terminal;
pub mod transport;
