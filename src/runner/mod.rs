pub mod executor;

pub use executor::{Execute, RequestExecutor, RequestFailed};
