#[cfg(test)]
mod tests {
    use super::super::error::{ErrorKind, KenallError};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (401, ErrorKind::Unauthorized),
            (402, ErrorKind::PaymentRequired),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (405, ErrorKind::MethodNotAllowed),
            (500, ErrorKind::InternalServerError),
            (418, ErrorKind::UnregisteredStatus),
            (502, ErrorKind::UnregisteredStatus),
            (503, ErrorKind::UnregisteredStatus),
        ];

        for (status, kind) in cases {
            let error = KenallError::from_status(status);
            assert_eq!(error.kind(), kind, "status {}", status);
            assert_eq!(error.status_code(), Some(status));
        }
    }

    #[test]
    fn test_unregistered_status_is_not_sentinel() {
        let error = KenallError::from_status(418);

        assert!(!error.is_sentinel());
        assert!(error.to_string().contains("418"));
    }

    #[test]
    fn test_sentinel_messages() {
        assert!(KenallError::Unauthorized.is_sentinel());
        assert_eq!(
            KenallError::Unauthorized.to_string(),
            "kenall: 401 unauthorized error"
        );
        assert_eq!(
            KenallError::InternalServerError.to_string(),
            "kenall: 500 internal server error"
        );
    }

    #[test]
    fn test_invalid_argument() {
        let error = KenallError::invalid_argument("postal code must be 7 digits");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(!error.is_sentinel());
        assert_eq!(error.status_code(), None);
        assert!(error.to_string().contains("postal code must be 7 digits"));
    }

    #[test]
    fn test_decode_error_keeps_cause() {
        let cause = serde_json::from_str::<u32>("wrong").unwrap_err();
        let error = KenallError::Decode(cause);

        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().starts_with("kenall: failed to decode response"));
    }

    #[test]
    fn test_unauthorized_hint() {
        let hint = KenallError::Unauthorized.hint();

        assert!(hint.is_some());
        assert!(hint.unwrap().contains("kenall config set api.token"));
    }

    #[test]
    fn test_no_hint_for_forbidden() {
        assert!(KenallError::Forbidden.hint().is_none());
    }
}
