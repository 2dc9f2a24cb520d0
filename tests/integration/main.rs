//! Integration tests against in-process stubs of the FAST suggest service
//! and the record server

mod api_tests;
mod navigator_tests;
mod stub;
