// Candidate profiles: one JSONB document per candidate, replaced on every save.

pub mod handlers;
pub mod repository;
