pub mod applicants;
pub mod applications;
pub mod auth;
pub mod employers;
pub mod jobs;
pub mod probes;
