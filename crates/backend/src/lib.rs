pub mod api;
pub mod domain;
pub mod routes;
pub mod seed;
pub mod shared;
pub mod storage;
