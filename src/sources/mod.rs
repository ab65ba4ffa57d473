pub mod json_file;
pub mod mock;
pub mod traits;

pub use json_file::JsonFileSource;
pub use mock::MockListingSource;
pub use traits::ListingSource;
