pub mod api;
pub mod cleanup_task;
pub mod game_session_manager;
pub mod server_config;
pub mod web_server;
