pub mod chat_model;
pub mod content_collector;
pub mod quiz_generator;
pub mod quiz_service;
pub mod quiz_store;
pub mod scorer;
pub mod url_resolver;
pub mod youtube;
