//! Адрес бэкенда для запросов из браузера.
//!
//! Бэкенд слушает отдельный порт на том же хосте, что и страница.

/// Порт бэкенда по умолчанию (см. `[server] port` в config.toml)
pub const API_PORT: u16 = 3000;

/// Base URL like "http://localhost:3000", or an empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    compose_base(&protocol, &hostname, API_PORT)
}

fn compose_base(protocol: &str, hostname: &str, port: u16) -> String {
    let protocol = if protocol.ends_with(':') {
        protocol.to_string()
    } else {
        format!("{}:", protocol)
    };
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Полный URL для пути API ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_base() {
        assert_eq!(compose_base("https:", "example.com", 3000), "https://example.com:3000");
        assert_eq!(compose_base("http", "localhost", 8080), "http://localhost:8080");
    }
}
