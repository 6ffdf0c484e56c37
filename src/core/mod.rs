//! Core header derivation: the sensor band table, the header composer, and
//! batch parameters. Pure logic with no file-system access; the `io` layer
//! feeds it parsed metadata and writes its output.
pub mod header;
pub mod params;
pub mod sensors;
