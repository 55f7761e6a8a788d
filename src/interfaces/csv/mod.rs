//! CSV adapters for the command-line host: scripted input, snapshot output.

pub mod script_reader;
pub mod view_writer;
