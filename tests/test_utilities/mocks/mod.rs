mod mock_feed_source;
mod mock_vendor_list_source;

pub use mock_feed_source::MockFeedSource;
pub use mock_vendor_list_source::MockVendorListSource;
