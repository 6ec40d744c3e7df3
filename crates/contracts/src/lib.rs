//! Types shared between the web frontend and the service that launches runs.

pub mod usecases;
