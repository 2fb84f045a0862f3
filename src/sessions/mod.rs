pub mod consts;
pub mod handlers;
pub mod requests;
pub mod responses;
pub mod storage;
