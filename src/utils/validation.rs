use crate::utils::error::{Result, ViewerError};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Expected host:port, {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ViewerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("html_path", "index.html").is_ok());
        assert!(validate_path("html_path", "").is_err());
        assert!(validate_path("html_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        let addr = validate_socket_addr("server.bind", "127.0.0.1:8501").unwrap();
        assert_eq!(addr.port(), 8501);
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
        assert!(validate_socket_addr("server.bind", "").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("embed.height", 800u32, 1, 10_000).is_ok());
        assert!(validate_range("embed.height", 0u32, 1, 10_000).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.title", "Viewer").is_ok());
        assert!(validate_non_empty_string("server.title", "   ").is_err());
    }
}
