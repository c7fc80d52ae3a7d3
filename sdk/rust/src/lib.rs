//! Typed client for the employee facade's HTTP API.

pub mod client;

pub use client::{CreateEmployee, Employee, FacadeClient, SdkError};
