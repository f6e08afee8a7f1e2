pub mod track_cves;

pub use track_cves::TrackCvesUseCase;
