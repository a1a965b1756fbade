/// Why the user's position could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission to read the position was denied")]
    PermissionDenied,
    #[error("position is unavailable")]
    PositionUnavailable,
    #[error("timed out waiting for the position")]
    Timeout,
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

#[test]
fn position_error_codes() {
    assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
    assert_eq!(GeolocationError::from_code(2), GeolocationError::PositionUnavailable);
    assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
}
