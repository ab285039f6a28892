
/// Path of the About section content on the backend.
pub const ABOUT_ENDPOINT: &str = "/api/aboutSection/getAboutSec";

/// YouTube id of the "See Our Vision in Action" video.
pub const VISION_VIDEO_ID: &str = "c-goZSYW6qE";

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    // Override at build time with CSK_BACKEND_URL=...
    option_env!("CSK_BACKEND_URL").unwrap_or("http://localhost:3001")
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("CSK_BACKEND_URL").unwrap_or("")  // Same origin in production
}

pub fn about_url() -> String {
    format!("{}{}", get_backend_url(), ABOUT_ENDPOINT)
}
