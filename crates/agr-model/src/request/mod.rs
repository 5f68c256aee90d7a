mod method;
pub use method::HttpMethod;

mod options;
pub use options::RequestOptions;
