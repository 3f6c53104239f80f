//! Application lifecycle holder for the resolver

mod application;

pub use application::ApplicationContext;
