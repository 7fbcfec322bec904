mod client;
mod credential;
mod errors;
mod params;
pub mod request;
pub use self::client::{Client, MONZO_API_URL};
pub use self::credential::AccessToken;
pub use self::errors::{ApiError, Error};
pub use self::params::Params;
pub use self::request::{Body, RequestDescriptor, RequestEncoder};
