pub mod admin;
pub mod artist;
pub mod auth;
pub mod contact;
pub mod email;
pub mod event;
pub mod journalist;
pub mod news;
pub mod profile;
pub mod storage;
pub mod venue;
