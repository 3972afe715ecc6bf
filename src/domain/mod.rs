// Domain layer - Readings, chart series, target temperature and system status
pub mod reading;
pub mod status;
pub mod target;
