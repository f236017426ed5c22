mod check_data;
mod get_suggestions;
mod live_server;
mod store_failure;
mod write_data;
