pub mod envi;
