pub mod csv_loader;
pub mod currency;
pub mod logging;
