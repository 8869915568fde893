pub mod async_handler;
pub mod error;
pub mod json_body;
pub mod response;
pub mod security;
