// Job applications: one per (candidate, job), reviewed by the job's company.

pub mod handlers;
pub mod repository;
