//! Desktop rendition of the Estate du Oud landing page's project carousel.

pub mod app;
pub mod constants;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
