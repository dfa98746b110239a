pub mod shutdown;
pub mod startup;
