pub mod clock;
pub mod recording_view;
pub mod tokio_scheduler;
pub mod virtual_time;
