pub mod auth;
pub mod chat;
pub mod gallery;
pub mod home;
pub mod profile;
pub mod secrets;

pub use auth::*;
pub use chat::*;
pub use gallery::*;
pub use home::*;
pub use profile::*;
pub use secrets::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        auth::login,
        auth::logout,
        auth::is_authenticated,
        secrets::has_api_key,
        secrets::set_api_key,
        secrets::get_secret_path,
        chat::send_chat_message,
        chat::get_chat_transcript,
        gallery::generate_partner_image,
        gallery::list_generated_images,
        profile::get_user_profile,
        profile::update_user_profile,
        profile::toggle_privacy_setting,
        profile::start_video_verification,
        home::get_daily_picks,
    ]
}
