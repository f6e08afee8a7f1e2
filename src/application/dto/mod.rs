pub mod track_request;
pub mod track_response;

pub use track_request::TrackRequest;
pub use track_response::TrackResponse;
