//! HTTP surface: route handlers for the page and the JSON API

pub mod handlers;
