//! Domain extraction from target URLs.

use crate::error::AppError;
use url::Url;

/// Parses an absolute URL and returns its source domain.
///
/// The domain is the host, followed by `:port` when the URL carries a port
/// that is not the scheme's default. IPv6 hosts keep their brackets.
///
/// The host is normalized by URL parsing: ASCII letters are lowercased and
/// internationalized names are punycode-encoded, so stored domains never
/// contain uppercase letters.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the input is not an absolute URL or
/// has no host component.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("http://example.com:8080/a").unwrap(), "example.com:8080");
/// assert_eq!(extract_domain("https://example.com:443/a").unwrap(), "example.com");
/// ```
pub fn extract_domain(raw: &str) -> Result<String, AppError> {
    let url = Url::parse(raw).map_err(|_| AppError::InvalidUrl)?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(AppError::InvalidUrl),
    };

    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_simple() {
        assert_eq!(
            extract_domain("http://example.com/123").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_domain_with_port() {
        assert_eq!(
            extract_domain("http://example.com:3000/path").unwrap(),
            "example.com:3000"
        );
    }

    #[test]
    fn test_extract_domain_default_port_is_dropped() {
        assert_eq!(
            extract_domain("https://example.com:443/path").unwrap(),
            "example.com"
        );
        assert_eq!(
            extract_domain("http://example.com:80").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_domain_subdomain() {
        assert_eq!(
            extract_domain("https://api.example.com/v1?q=1").unwrap(),
            "api.example.com"
        );
    }

    #[test]
    fn test_extract_domain_ip_with_port() {
        assert_eq!(
            extract_domain("http://192.168.1.1:9000/").unwrap(),
            "192.168.1.1:9000"
        );
    }

    #[test]
    fn test_extract_domain_ipv6_with_port() {
        assert_eq!(extract_domain("http://[::1]:8080/").unwrap(), "[::1]:8080");
    }

    #[test]
    fn test_extract_domain_normalizes_host() {
        assert_eq!(
            extract_domain("http://MyAwesome.com/Path").unwrap(),
            "myawesome.com"
        );
        assert_eq!(
            extract_domain("http://bücher.example/").unwrap(),
            "xn--bcher-kva.example"
        );
    }

    #[test]
    fn test_relative_url_is_invalid() {
        assert!(matches!(
            extract_domain("example.com/path"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn test_hostless_url_is_invalid() {
        assert!(matches!(
            extract_domain("mailto:someone@example.com"),
            Err(AppError::InvalidUrl)
        ));
        assert!(matches!(
            extract_domain("file:///etc/hosts"),
            Err(AppError::InvalidUrl)
        ));
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(matches!(extract_domain(""), Err(AppError::InvalidUrl)));
    }
}
