pub mod api_client;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod form_data;
pub mod icons;
pub mod list_controller;
pub mod list_loader;
pub mod modal;
pub mod optimistic;
pub mod page_frame;
pub mod toast;
