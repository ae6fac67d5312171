pub mod journalists;
