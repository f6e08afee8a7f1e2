mod nvd_client;

pub use nvd_client::NvdFeedClient;
