//! One module per customer operation. Each exposes `process_request`, which
//! takes the gateway request and an owned store handle; the handle is dropped
//! when the call returns, whichever branch was taken.

pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod list_customers;
