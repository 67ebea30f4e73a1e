#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // local lead API when developing
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // same origin in production
}
