// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;

use app::AppBootstrap;

fn main() {
    // The guard must stay alive for the whole run so buffered log lines are
    // flushed on exit.
    let _log_guard = app::logging::init();

    let bootstrap = AppBootstrap::init().expect("failed to initialize application state");

    tauri::Builder::default()
        .manage(bootstrap.app_state)
        .invoke_handler(commands::handlers())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
