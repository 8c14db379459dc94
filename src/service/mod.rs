pub mod sync_scheduler;
