pub mod api;
pub mod db;
pub mod domain;
pub mod pagination;
pub mod validation;
