mod credentials;

pub use credentials::ServiceAccountKey;
